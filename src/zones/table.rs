//! Abbreviation data for the zone table.
//!
//! Each entry maps an abbreviation to the IANA zone identifiers that share
//! it. Lists are ordered; only the first identifier is consulted when a
//! lookup is resolved to a wall-clock time. Several identifiers are legacy
//! tzdb aliases kept for completeness.

pub(super) static ZONES: &[(&str, &[&str])] = &[
    (
        "ACDT",
        &[
            "Australia/Adelaide",
            "Australia/Broken_Hill",
            "Australia/South",
            "Australia/Yancowinna",
        ],
    ),
    (
        "ACST",
        &[
            "Australia/Darwin",
            "Australia/North",
        ],
    ),
    (
        "ACT",
        &[
            "America/Eirunepe",
            "America/Porto_Acre",
            "America/Rio_Branco",
            "Brazil/Acre",
        ],
    ),
    (
        "ACWST",
        &[
            "Australia/Eucla",
        ],
    ),
    (
        "AEDT",
        &[
            "Australia/ACT",
            "Australia/Canberra",
            "Australia/Currie",
            "Australia/Hobart",
            "Australia/Melbourne",
            "Australia/NSW",
            "Australia/Sydney",
            "Australia/Tasmania",
            "Australia/Victoria",
        ],
    ),
    (
        "AEST",
        &[
            "Australia/Brisbane",
            "Australia/Lindeman",
            "Australia/Queensland",
        ],
    ),
    (
        "AFT",
        &[
            "Asia/Kabul",
        ],
    ),
    (
        "AKST",
        &[
            "America/Anchorage",
            "America/Juneau",
            "America/Nome",
            "America/Sitka",
            "America/Yakutat",
            "US/Alaska",
        ],
    ),
    (
        "ALMT",
        &[
            "Asia/Almaty",
        ],
    ),
    (
        "AMT",
        &[
            "America/Boa_Vista",
            "America/Campo_Grande",
            "America/Cuiaba",
            "America/Manaus",
            "America/Porto_Velho",
            "Asia/Yerevan",
            "Brazil/West",
        ],
    ),
    (
        "ANAT",
        &[
            "Asia/Anadyr",
        ],
    ),
    (
        "AQTT",
        &[
            "Asia/Aqtau",
            "Asia/Aqtobe",
        ],
    ),
    (
        "ART",
        &[
            "America/Argentina/Buenos_Aires",
            "America/Argentina/Catamarca",
            "America/Argentina/ComodRivadavia",
            "America/Argentina/Cordoba",
            "America/Argentina/Jujuy",
            "America/Argentina/La_Rioja",
            "America/Argentina/Mendoza",
            "America/Argentina/Rio_Gallegos",
            "America/Argentina/Salta",
            "America/Argentina/San_Juan",
            "America/Argentina/San_Luis",
            "America/Argentina/Tucuman",
            "America/Argentina/Ushuaia",
            "America/Buenos_Aires",
            "America/Catamarca",
            "America/Cordoba",
            "America/Jujuy",
            "America/Mendoza",
            "America/Rosario",
        ],
    ),
    (
        "AST",
        &[
            "America/Anguilla",
            "America/Antigua",
            "America/Aruba",
            "America/Barbados",
            "America/Blanc-Sablon",
            "America/Curacao",
            "America/Dominica",
            "America/Glace_Bay",
            "America/Goose_Bay",
            "America/Grand_Turk",
            "America/Grenada",
            "America/Guadeloupe",
            "America/Halifax",
            "America/Kralendijk",
            "America/Lower_Princes",
            "America/Marigot",
            "America/Martinique",
            "America/Moncton",
            "America/Montserrat",
            "America/Port_of_Spain",
            "America/Puerto_Rico",
            "America/Santo_Domingo",
            "America/St_Barthelemy",
            "America/St_Kitts",
            "America/St_Lucia",
            "America/St_Thomas",
            "America/St_Vincent",
            "America/Thule",
            "America/Tortola",
            "America/Virgin",
            "Asia/Aden",
            "Asia/Baghdad",
            "Asia/Bahrain",
            "Asia/Kuwait",
            "Asia/Qatar",
            "Asia/Riyadh",
            "Atlantic/Bermuda",
            "Canada/Atlantic",
        ],
    ),
    (
        "AWST",
        &[
            "Antarctica/Casey",
            "Australia/Perth",
            "Australia/West",
        ],
    ),
    (
        "AZOT",
        &[
            "Atlantic/Azores",
        ],
    ),
    (
        "AZT",
        &[
            "Asia/Baku",
        ],
    ),
    (
        "BDT",
        &[
            "Asia/Dacca",
            "Asia/Dhaka",
        ],
    ),
    (
        "BNT",
        &[
            "Asia/Brunei",
        ],
    ),
    (
        "BOT",
        &[
            "America/La_Paz",
        ],
    ),
    (
        "BRT",
        &[
            "America/Araguaina",
            "America/Bahia",
            "America/Belem",
            "America/Fortaleza",
            "America/Maceio",
            "America/Recife",
            "America/Santarem",
            "America/Sao_Paulo",
            "Brazil/East",
        ],
    ),
    (
        "BST",
        &[
            "Pacific/Bougainville",
        ],
    ),
    (
        "BTT",
        &[
            "Asia/Thimbu",
            "Asia/Thimphu",
        ],
    ),
    (
        "CAT",
        &[
            "Africa/Blantyre",
            "Africa/Bujumbura",
            "Africa/Gaborone",
            "Africa/Harare",
            "Africa/Kigali",
            "Africa/Lubumbashi",
            "Africa/Lusaka",
            "Africa/Maputo",
        ],
    ),
    (
        "CCT",
        &[
            "Indian/Cocos",
        ],
    ),
    (
        "CET",
        &[
            "Africa/Algiers",
            "Africa/Ceuta",
            "Africa/Tunis",
            "Arctic/Longyearbyen",
            "Atlantic/Jan_Mayen",
            "CET",
            "Europe/Amsterdam",
            "Europe/Andorra",
            "Europe/Belgrade",
            "Europe/Berlin",
            "Europe/Bratislava",
            "Europe/Brussels",
            "Europe/Budapest",
            "Europe/Busingen",
            "Europe/Copenhagen",
            "Europe/Gibraltar",
            "Europe/Ljubljana",
            "Europe/Luxembourg",
            "Europe/Madrid",
            "Europe/Malta",
            "Europe/Monaco",
            "Europe/Oslo",
            "Europe/Paris",
            "Europe/Podgorica",
            "Europe/Prague",
            "Europe/Rome",
            "Europe/San_Marino",
            "Europe/Sarajevo",
            "Europe/Skopje",
            "Europe/Stockholm",
            "Europe/Tirane",
            "Europe/Vaduz",
            "Europe/Vatican",
            "Europe/Vienna",
            "Europe/Warsaw",
            "Europe/Zagreb",
            "Europe/Zurich",
            "Poland",
        ],
    ),
    (
        "CHADT",
        &[
            "NZ-CHAT",
            "Pacific/Chatham",
        ],
    ),
    (
        "CHOT",
        &[
            "Asia/Choibalsan",
        ],
    ),
    (
        "CHUT",
        &[
            "Pacific/Chuuk",
            "Pacific/Truk",
            "Pacific/Yap",
        ],
    ),
    (
        "CKT",
        &[
            "Pacific/Rarotonga",
        ],
    ),
    (
        "CLT",
        &[
            "America/Santiago",
            "Antarctica/Palmer",
            "Chile/Continental",
        ],
    ),
    (
        "COT",
        &[
            "America/Bogota",
        ],
    ),
    (
        "CST",
        &[
            "America/Bahia_Banderas",
            "America/Belize",
            "America/Chicago",
            "America/Costa_Rica",
            "America/El_Salvador",
            "America/Guatemala",
            "America/Havana",
            "America/Indiana/Knox",
            "America/Indiana/Tell_City",
            "America/Knox_IN",
            "America/Managua",
            "America/Matamoros",
            "America/Menominee",
            "America/Merida",
            "America/Mexico_City",
            "America/Monterrey",
            "America/North_Dakota/Beulah",
            "America/North_Dakota/Center",
            "America/North_Dakota/New_Salem",
            "America/Rainy_River",
            "America/Rankin_Inlet",
            "America/Regina",
            "America/Resolute",
            "America/Swift_Current",
            "America/Tegucigalpa",
            "America/Winnipeg",
            "Asia/Chongqing",
            "Asia/Chungking",
            "Asia/Harbin",
            "Asia/Macao",
            "Asia/Macau",
            "Asia/Shanghai",
            "Asia/Taipei",
            "CST6CDT",
            "Canada/Central",
            "Canada/East-Saskatchewan",
            "Canada/Saskatchewan",
            "Cuba",
            "Mexico/General",
            "PRC",
            "ROC",
            "US/Central",
            "US/Indiana-Starke",
        ],
    ),
    (
        "CVT",
        &[
            "Atlantic/Cape_Verde",
        ],
    ),
    (
        "CXT",
        &[
            "Indian/Christmas",
        ],
    ),
    (
        "ChST",
        &[
            "Pacific/Guam",
            "Pacific/Saipan",
        ],
    ),
    (
        "DAVT",
        &[
            "Antarctica/Davis",
        ],
    ),
    (
        "DDUT",
        &[
            "Antarctica/DumontDUrville",
        ],
    ),
    (
        "EAST",
        &[
            "Chile/EasterIsland",
            "Pacific/Easter",
        ],
    ),
    (
        "EAT",
        &[
            "Africa/Addis_Ababa",
            "Africa/Asmara",
            "Africa/Asmera",
            "Africa/Dar_es_Salaam",
            "Africa/Djibouti",
            "Africa/Juba",
            "Africa/Kampala",
            "Africa/Khartoum",
            "Africa/Mogadishu",
            "Africa/Nairobi",
            "Indian/Antananarivo",
            "Indian/Comoro",
            "Indian/Mayotte",
        ],
    ),
    (
        "ECT",
        &[
            "America/Guayaquil",
        ],
    ),
    (
        "EET",
        &[
            "Africa/Cairo",
            "Africa/Tripoli",
            "Asia/Amman",
            "Asia/Beirut",
            "Asia/Damascus",
            "Asia/Gaza",
            "Asia/Hebron",
            "Asia/Istanbul",
            "Asia/Nicosia",
            "EET",
            "Egypt",
            "Europe/Athens",
            "Europe/Bucharest",
            "Europe/Chisinau",
            "Europe/Helsinki",
            "Europe/Istanbul",
            "Europe/Kaliningrad",
            "Europe/Kiev",
            "Europe/Mariehamn",
            "Europe/Nicosia",
            "Europe/Riga",
            "Europe/Sofia",
            "Europe/Tallinn",
            "Europe/Tiraspol",
            "Europe/Uzhgorod",
            "Europe/Vilnius",
            "Europe/Zaporozhye",
            "Libya",
            "Turkey",
        ],
    ),
    (
        "EGT",
        &[
            "America/Scoresbysund",
        ],
    ),
    (
        "EST",
        &[
            "America/Atikokan",
            "America/Cancun",
            "America/Cayman",
            "America/Coral_Harbour",
            "America/Detroit",
            "America/Fort_Wayne",
            "America/Indiana/Indianapolis",
            "America/Indiana/Marengo",
            "America/Indiana/Petersburg",
            "America/Indiana/Vevay",
            "America/Indiana/Vincennes",
            "America/Indiana/Winamac",
            "America/Indianapolis",
            "America/Iqaluit",
            "America/Jamaica",
            "America/Kentucky/Louisville",
            "America/Kentucky/Monticello",
            "America/Louisville",
            "America/Montreal",
            "America/Nassau",
            "America/New_York",
            "America/Nipigon",
            "America/Panama",
            "America/Pangnirtung",
            "America/Port-au-Prince",
            "America/Thunder_Bay",
            "America/Toronto",
            "Canada/Eastern",
            "EST",
            "EST5EDT",
            "Jamaica",
            "US/East-Indiana",
            "US/Eastern",
            "US/Michigan",
        ],
    ),
    (
        "FJT",
        &[
            "Pacific/Fiji",
        ],
    ),
    (
        "FKST",
        &[
            "Atlantic/Stanley",
        ],
    ),
    (
        "FNT",
        &[
            "America/Noronha",
            "Brazil/DeNoronha",
        ],
    ),
    (
        "GALT",
        &[
            "Pacific/Galapagos",
        ],
    ),
    (
        "GAMT",
        &[
            "Pacific/Gambier",
        ],
    ),
    (
        "GET",
        &[
            "Asia/Tbilisi",
        ],
    ),
    (
        "GFT",
        &[
            "America/Cayenne",
        ],
    ),
    (
        "GILT",
        &[
            "Pacific/Tarawa",
        ],
    ),
    (
        "GMT",
        &[
            "Africa/Abidjan",
            "Africa/Accra",
            "Africa/Bamako",
            "Africa/Banjul",
            "Africa/Bissau",
            "Africa/Conakry",
            "Africa/Dakar",
            "Africa/Freetown",
            "Africa/Lome",
            "Africa/Monrovia",
            "Africa/Nouakchott",
            "Africa/Ouagadougou",
            "Africa/Sao_Tome",
            "Africa/Timbuktu",
            "America/Danmarkshavn",
            "Atlantic/Reykjavik",
            "Atlantic/St_Helena",
            "Eire",
            "Etc/GMT",
            "Etc/GMT+0",
            "Etc/GMT-0",
            "Etc/GMT0",
            "Etc/Greenwich",
            "Europe/Belfast",
            "Europe/Dublin",
            "Europe/Guernsey",
            "Europe/Isle_of_Man",
            "Europe/Jersey",
            "Europe/London",
            "GB",
            "GB-Eire",
            "GMT",
            "GMT+0",
            "GMT-0",
            "GMT0",
            "Greenwich",
            "Iceland",
        ],
    ),
    (
        "GMT+1",
        &[
            "Etc/GMT+1",
        ],
    ),
    (
        "GMT+10",
        &[
            "Etc/GMT+10",
        ],
    ),
    (
        "GMT+11",
        &[
            "Etc/GMT+11",
        ],
    ),
    (
        "GMT+12",
        &[
            "Etc/GMT+12",
        ],
    ),
    (
        "GMT+2",
        &[
            "Etc/GMT+2",
        ],
    ),
    (
        "GMT+3",
        &[
            "Etc/GMT+3",
        ],
    ),
    (
        "GMT+4",
        &[
            "Etc/GMT+4",
        ],
    ),
    (
        "GMT+5",
        &[
            "Etc/GMT+5",
        ],
    ),
    (
        "GMT+6",
        &[
            "Etc/GMT+6",
        ],
    ),
    (
        "GMT+7",
        &[
            "Etc/GMT+7",
        ],
    ),
    (
        "GMT+8",
        &[
            "Etc/GMT+8",
        ],
    ),
    (
        "GMT+9",
        &[
            "Etc/GMT+9",
        ],
    ),
    (
        "GMT-1",
        &[
            "Etc/GMT-1",
        ],
    ),
    (
        "GMT-10",
        &[
            "Etc/GMT-10",
        ],
    ),
    (
        "GMT-11",
        &[
            "Etc/GMT-11",
        ],
    ),
    (
        "GMT-12",
        &[
            "Etc/GMT-12",
        ],
    ),
    (
        "GMT-13",
        &[
            "Etc/GMT-13",
        ],
    ),
    (
        "GMT-14",
        &[
            "Etc/GMT-14",
        ],
    ),
    (
        "GMT-2",
        &[
            "Etc/GMT-2",
        ],
    ),
    (
        "GMT-3",
        &[
            "Etc/GMT-3",
        ],
    ),
    (
        "GMT-4",
        &[
            "Etc/GMT-4",
        ],
    ),
    (
        "GMT-5",
        &[
            "Etc/GMT-5",
        ],
    ),
    (
        "GMT-6",
        &[
            "Etc/GMT-6",
        ],
    ),
    (
        "GMT-7",
        &[
            "Etc/GMT-7",
        ],
    ),
    (
        "GMT-8",
        &[
            "Etc/GMT-8",
        ],
    ),
    (
        "GMT-9",
        &[
            "Etc/GMT-9",
        ],
    ),
    (
        "GST",
        &[
            "Asia/Dubai",
            "Asia/Muscat",
            "Atlantic/South_Georgia",
        ],
    ),
    (
        "GYT",
        &[
            "America/Guyana",
        ],
    ),
    (
        "HKT",
        &[
            "Asia/Hong_Kong",
            "Hongkong",
        ],
    ),
    (
        "HOVT",
        &[
            "Asia/Hovd",
        ],
    ),
    (
        "HST",
        &[
            "America/Adak",
            "America/Atka",
            "HST",
            "Pacific/Honolulu",
            "Pacific/Johnston",
            "US/Aleutian",
            "US/Hawaii",
        ],
    ),
    (
        "ICT",
        &[
            "Asia/Bangkok",
            "Asia/Ho_Chi_Minh",
            "Asia/Phnom_Penh",
            "Asia/Saigon",
            "Asia/Vientiane",
        ],
    ),
    (
        "IOT",
        &[
            "Indian/Chagos",
        ],
    ),
    (
        "IRKT",
        &[
            "Asia/Chita",
            "Asia/Irkutsk",
        ],
    ),
    (
        "IRST",
        &[
            "Asia/Tehran",
            "Iran",
        ],
    ),
    (
        "IST",
        &[
            "Asia/Calcutta",
            "Asia/Colombo",
            "Asia/Jerusalem",
            "Asia/Kolkata",
            "Asia/Tel_Aviv",
            "Israel",
        ],
    ),
    (
        "JST",
        &[
            "Asia/Tokyo",
            "Japan",
        ],
    ),
    (
        "KGT",
        &[
            "Asia/Bishkek",
        ],
    ),
    (
        "KOST",
        &[
            "Pacific/Kosrae",
        ],
    ),
    (
        "KRAT",
        &[
            "Asia/Krasnoyarsk",
            "Asia/Novokuznetsk",
        ],
    ),
    (
        "KST",
        &[
            "Asia/Pyongyang",
            "Asia/Seoul",
            "ROK",
        ],
    ),
    (
        "LHDT",
        &[
            "Australia/LHI",
            "Australia/Lord_Howe",
        ],
    ),
    (
        "LINT",
        &[
            "Pacific/Kiritimati",
        ],
    ),
    (
        "MAGT",
        &[
            "Asia/Magadan",
        ],
    ),
    (
        "MART",
        &[
            "Pacific/Marquesas",
        ],
    ),
    (
        "MAWT",
        &[
            "Antarctica/Mawson",
        ],
    ),
    (
        "MET",
        &[
            "MET",
        ],
    ),
    (
        "MHT",
        &[
            "Kwajalein",
            "Pacific/Kwajalein",
            "Pacific/Majuro",
        ],
    ),
    (
        "MIST",
        &[
            "Antarctica/Macquarie",
        ],
    ),
    (
        "MMT",
        &[
            "Asia/Rangoon",
        ],
    ),
    (
        "MSK",
        &[
            "Europe/Minsk",
            "Europe/Moscow",
            "Europe/Simferopol",
            "Europe/Volgograd",
            "W-SU",
        ],
    ),
    (
        "MST",
        &[
            "America/Boise",
            "America/Cambridge_Bay",
            "America/Chihuahua",
            "America/Creston",
            "America/Dawson_Creek",
            "America/Denver",
            "America/Edmonton",
            "America/Fort_Nelson",
            "America/Hermosillo",
            "America/Inuvik",
            "America/Mazatlan",
            "America/Ojinaga",
            "America/Phoenix",
            "America/Shiprock",
            "America/Yellowknife",
            "Canada/Mountain",
            "MST",
            "MST7MDT",
            "Mexico/BajaSur",
            "Navajo",
            "US/Arizona",
            "US/Mountain",
        ],
    ),
    (
        "MUT",
        &[
            "Indian/Mauritius",
        ],
    ),
    (
        "MVT",
        &[
            "Indian/Maldives",
            "Asia/Kuala_Lumpur",
            "Asia/Kuching",
        ],
    ),
    (
        "NCT",
        &[
            "Pacific/Noumea",
        ],
    ),
    (
        "NFT",
        &[
            "Pacific/Norfolk",
        ],
    ),
    (
        "NOVT",
        &[
            "Asia/Novosibirsk",
        ],
    ),
    (
        "NPT",
        &[
            "Asia/Kathmandu",
            "Asia/Katmandu",
        ],
    ),
    (
        "NRT",
        &[
            "Pacific/Nauru",
        ],
    ),
    (
        "NST",
        &[
            "America/St_Johns",
            "Canada/Newfoundland",
        ],
    ),
    (
        "NUT",
        &[
            "Pacific/Niue",
        ],
    ),
    (
        "NZDT",
        &[
            "Antarctica/McMurdo",
            "Antarctica/South_Pole",
            "NZ",
            "Pacific/Auckland",
        ],
    ),
    (
        "OMST",
        &[
            "Asia/Omsk",
        ],
    ),
    (
        "ORAT",
        &[
            "Asia/Oral",
        ],
    ),
    (
        "PET",
        &[
            "America/Lima",
        ],
    ),
    (
        "PETT",
        &[
            "Asia/Kamchatka",
        ],
    ),
    (
        "PGT",
        &[
            "Pacific/Port_Moresby",
        ],
    ),
    (
        "PHOT",
        &[
            "Pacific/Enderbury",
        ],
    ),
    (
        "PHT",
        &[
            "Asia/Manila",
        ],
    ),
    (
        "PKT",
        &[
            "Asia/Karachi",
        ],
    ),
    (
        "PMST",
        &[
            "America/Miquelon",
        ],
    ),
    (
        "PONT",
        &[
            "Pacific/Pohnpei",
            "Pacific/Ponape",
        ],
    ),
    (
        "PST",
        &[
            "America/Dawson",
            "America/Ensenada",
            "America/Los_Angeles",
            "America/Metlakatla",
            "America/Santa_Isabel",
            "America/Tijuana",
            "America/Vancouver",
            "America/Whitehorse",
            "Canada/Pacific",
            "Canada/Yukon",
            "Mexico/BajaNorte",
            "PST8PDT",
            "Pacific/Pitcairn",
            "US/Pacific",
            "US/Pacific-New",
        ],
    ),
    (
        "PWT",
        &[
            "Pacific/Palau",
        ],
    ),
    (
        "PYST",
        &[
            "America/Asuncion",
        ],
    ),
    (
        "QYZT",
        &[
            "Asia/Qyzylorda",
        ],
    ),
    (
        "RET",
        &[
            "Indian/Reunion",
        ],
    ),
    (
        "ROTT",
        &[
            "Antarctica/Rothera",
        ],
    ),
    (
        "SAKT",
        &[
            "Asia/Sakhalin",
        ],
    ),
    (
        "SAMT",
        &[
            "Europe/Samara",
        ],
    ),
    (
        "SAST",
        &[
            "Africa/Johannesburg",
            "Africa/Maseru",
            "Africa/Mbabane",
        ],
    ),
    (
        "SBT",
        &[
            "Pacific/Guadalcanal",
        ],
    ),
    (
        "SCT",
        &[
            "Indian/Mahe",
        ],
    ),
    (
        "SGT",
        &[
            "Asia/Singapore",
            "Singapore",
        ],
    ),
    (
        "SRET",
        &[
            "Asia/Srednekolymsk",
        ],
    ),
    (
        "SRT",
        &[
            "America/Paramaribo",
        ],
    ),
    (
        "SST",
        &[
            "Pacific/Midway",
            "Pacific/Pago_Pago",
            "Pacific/Samoa",
            "US/Samoa",
        ],
    ),
    (
        "SYOT",
        &[
            "Antarctica/Syowa",
        ],
    ),
    (
        "TAHT",
        &[
            "Pacific/Tahiti",
        ],
    ),
    (
        "TFT",
        &[
            "Indian/Kerguelen",
        ],
    ),
    (
        "TJT",
        &[
            "Asia/Dushanbe",
        ],
    ),
    (
        "TKT",
        &[
            "Pacific/Fakaofo",
        ],
    ),
    (
        "TLT",
        &[
            "Asia/Dili",
        ],
    ),
    (
        "TMT",
        &[
            "Asia/Ashgabat",
            "Asia/Ashkhabad",
        ],
    ),
    (
        "TOT",
        &[
            "Pacific/Tongatapu",
        ],
    ),
    (
        "TVT",
        &[
            "Pacific/Funafuti",
        ],
    ),
    (
        "UCT",
        &[
            "Etc/UCT",
            "UCT",
        ],
    ),
    (
        "ULAT",
        &[
            "Asia/Ulaanbaatar",
            "Asia/Ulan_Bator",
        ],
    ),
    (
        "UTC",
        &[
            "Antarctica/Troll",
            "Etc/UTC",
            "Etc/Universal",
            "Etc/Zulu",
            "UTC",
            "Universal",
            "Zulu",
        ],
    ),
    (
        "UYST",
        &[
            "America/Montevideo",
        ],
    ),
    (
        "UZT",
        &[
            "Asia/Samarkand",
            "Asia/Tashkent",
        ],
    ),
    (
        "VET",
        &[
            "America/Caracas",
        ],
    ),
    (
        "VLAT",
        &[
            "Asia/Ust-Nera",
            "Asia/Vladivostok",
        ],
    ),
    (
        "VOST",
        &[
            "Antarctica/Vostok",
        ],
    ),
    (
        "VUT",
        &[
            "Pacific/Efate",
        ],
    ),
    (
        "WAKT",
        &[
            "Pacific/Wake",
        ],
    ),
    (
        "WAST",
        &[
            "Africa/Windhoek",
        ],
    ),
    (
        "WAT",
        &[
            "Africa/Bangui",
            "Africa/Brazzaville",
            "Africa/Douala",
            "Africa/Kinshasa",
            "Africa/Lagos",
            "Africa/Libreville",
            "Africa/Luanda",
            "Africa/Malabo",
            "Africa/Ndjamena",
            "Africa/Niamey",
            "Africa/Porto-Novo",
        ],
    ),
    (
        "WET",
        &[
            "Africa/Casablanca",
            "Africa/El_Aaiun",
            "Atlantic/Canary",
            "Atlantic/Faeroe",
            "Atlantic/Faroe",
            "Atlantic/Madeira",
            "Europe/Lisbon",
            "Portugal",
            "WET",
        ],
    ),
    (
        "WFT",
        &[
            "Pacific/Wallis",
        ],
    ),
    (
        "WGT",
        &[
            "America/Godthab",
        ],
    ),
    (
        "WIB",
        &[
            "Asia/Jakarta",
            "Asia/Pontianak",
        ],
    ),
    (
        "WIT",
        &[
            "Asia/Jayapura",
        ],
    ),
    (
        "WITA",
        &[
            "Asia/Makassar",
            "Asia/Ujung_Pandang",
        ],
    ),
    (
        "WSDT",
        &[
            "Pacific/Apia",
        ],
    ),
    (
        "XJT",
        &[
            "Asia/Kashgar",
            "Asia/Urumqi",
        ],
    ),
    (
        "YAKT",
        &[
            "Asia/Khandyga",
            "Asia/Yakutsk",
        ],
    ),
    (
        "YEKT",
        &[
            "Asia/Yekaterinburg",
        ],
    ),
    (
        "Local time zone must be set--see zic manual page",
        &[
            "Factory",
        ],
    ),
];
