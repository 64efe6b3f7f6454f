//! Static geographic reference data.
//!
//! Two curated tables, built into the binary and never mutated at runtime:
//! the province-to-forecast-office map used to pick the feed directory, and
//! the region-to-keyword table used by the geographic matcher.

/// A named forecast region and the location keywords that fall inside it.
///
/// `name` is matched (lowercased) against an alert's free-text area
/// description; `keywords` are matched against the user's location name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Forecast office responsible for a province or territory.
///
/// Office codes follow the feed's per-office directory names. Returns
/// `None` for unknown codes; matching is case-insensitive.
pub fn office_for_province(code: &str) -> Option<&'static str> {
    let office = match code.to_ascii_uppercase().as_str() {
        "BC" => "CWVR",
        "AB" => "CWEG",
        "SK" => "CWWG",
        "MB" => "CWWG",
        "ON" => "CWTO",
        "QC" => "CWUL",
        "NB" => "CWHX",
        "NS" => "CWHX",
        "PE" => "CWHX",
        "NL" => "CYQX",
        "YT" => "CWNT",
        "NT" => "CWNT",
        "NU" => "CWNT",
        _ => return None,
    };
    Some(office)
}

/// The 13 province and territory codes with a mapped office.
pub const PROVINCE_CODES: &[&str] = &[
    "BC", "AB", "SK", "MB", "ON", "QC", "NB", "NS", "PE", "NL", "YT", "NT", "NU",
];

/// Keywords for area texts qualified with "coastal".
///
/// An area like "North Coast - coastal sections" only matches locations
/// that appear here; it never falls through to the general region table.
pub const COASTAL_KEYWORDS: &[&str] = &[
    "prince rupert",
    "port edward",
    "haida gwaii",
    "queen charlotte",
    "sandspit",
    "masset",
    "bella bella",
    "bella coola",
    "port hardy",
    "tofino",
    "ucluelet",
    "powell river",
];

/// Keywords for area texts qualified with "inland".
pub const INLAND_KEYWORDS: &[&str] = &[
    "terrace",
    "kitimat",
    "smithers",
    "houston",
    "burns lake",
    "stewart",
    "hazelton",
    "dease lake",
];

/// The curated region table, ordered roughly west to east.
pub const REGION_TABLE: &[Region] = &[
    // British Columbia
    Region {
        name: "metro vancouver",
        keywords: &[
            "vancouver",
            "burnaby",
            "richmond",
            "surrey",
            "coquitlam",
            "new westminster",
            "delta",
            "langley",
        ],
    },
    Region {
        name: "fraser valley",
        keywords: &["abbotsford", "chilliwack", "mission", "hope", "agassiz"],
    },
    Region {
        name: "howe sound",
        keywords: &["squamish", "whistler", "pemberton", "lions bay"],
    },
    Region {
        name: "sunshine coast",
        keywords: &["gibsons", "sechelt", "powell river"],
    },
    Region {
        name: "vancouver island",
        keywords: &[
            "victoria",
            "nanaimo",
            "duncan",
            "parksville",
            "courtenay",
            "campbell river",
            "port alberni",
        ],
    },
    Region {
        name: "north coast",
        keywords: &["prince rupert", "terrace", "kitimat", "stewart"],
    },
    Region {
        name: "bulkley valley",
        keywords: &["smithers", "houston", "burns lake", "telkwa"],
    },
    Region {
        name: "cariboo",
        keywords: &["williams lake", "quesnel", "100 mile house"],
    },
    Region {
        name: "prince george",
        keywords: &["prince george", "vanderhoof", "mackenzie"],
    },
    Region {
        name: "peace river",
        keywords: &["fort st. john", "dawson creek", "chetwynd", "tumbler ridge"],
    },
    Region {
        name: "okanagan",
        keywords: &["kelowna", "vernon", "penticton", "summerland", "osoyoos"],
    },
    Region {
        name: "shuswap",
        keywords: &["salmon arm", "sicamous", "chase"],
    },
    Region {
        name: "thompson",
        keywords: &["kamloops", "merritt", "ashcroft"],
    },
    Region {
        name: "kootenay",
        keywords: &["nelson", "castlegar", "trail", "cranbrook", "fernie", "golden"],
    },
    // Alberta
    Region {
        name: "calgary",
        keywords: &["calgary", "airdrie", "cochrane", "okotoks"],
    },
    Region {
        name: "edmonton",
        keywords: &["edmonton", "st. albert", "sherwood park", "leduc", "spruce grove"],
    },
    Region {
        name: "red deer",
        keywords: &["red deer", "innisfail", "lacombe"],
    },
    Region {
        name: "lethbridge",
        keywords: &["lethbridge", "coaldale", "taber"],
    },
    Region {
        name: "medicine hat",
        keywords: &["medicine hat", "redcliff"],
    },
    Region {
        name: "fort mcmurray",
        keywords: &["fort mcmurray", "fort mackay"],
    },
    Region {
        name: "grande prairie",
        keywords: &["grande prairie", "beaverlodge", "sexsmith"],
    },
    Region {
        name: "banff",
        keywords: &["banff", "canmore", "lake louise"],
    },
    Region {
        name: "jasper",
        keywords: &["jasper", "hinton", "edson"],
    },
    // Saskatchewan
    Region {
        name: "saskatoon",
        keywords: &["saskatoon", "warman", "martensville"],
    },
    Region {
        name: "regina",
        keywords: &["regina", "moose jaw", "lumsden", "white city"],
    },
    Region {
        name: "prince albert",
        keywords: &["prince albert", "melfort", "nipawin"],
    },
    Region {
        name: "swift current",
        keywords: &["swift current", "gull lake"],
    },
    // Manitoba
    Region {
        name: "winnipeg",
        keywords: &["winnipeg", "selkirk", "steinbach", "stonewall"],
    },
    Region {
        name: "brandon",
        keywords: &["brandon", "virden", "souris"],
    },
    Region {
        name: "thompson region",
        keywords: &["thompson", "gillam"],
    },
    // Ontario
    Region {
        name: "southern ontario",
        keywords: &[
            "toronto",
            "hamilton",
            "mississauga",
            "brampton",
            "oakville",
            "burlington",
            "oshawa",
        ],
    },
    Region {
        name: "golden horseshoe",
        keywords: &["toronto", "hamilton", "st. catharines", "oshawa"],
    },
    Region {
        name: "niagara",
        keywords: &["st. catharines", "niagara falls", "welland", "fort erie"],
    },
    Region {
        name: "southwestern ontario",
        keywords: &["london", "windsor", "sarnia", "chatham", "woodstock"],
    },
    Region {
        name: "eastern ontario",
        keywords: &["ottawa", "kingston", "cornwall", "brockville", "pembroke"],
    },
    Region {
        name: "georgian bay",
        keywords: &["barrie", "midland", "owen sound", "collingwood"],
    },
    Region {
        name: "northern ontario",
        keywords: &["sudbury", "north bay", "timmins", "sault ste. marie"],
    },
    Region {
        name: "northwestern ontario",
        keywords: &["thunder bay", "kenora", "dryden", "fort frances"],
    },
    // Quebec
    Region {
        name: "montreal",
        keywords: &["montreal", "laval", "longueuil", "brossard"],
    },
    Region {
        name: "quebec city",
        keywords: &["quebec city", "levis", "beauport"],
    },
    Region {
        name: "gatineau",
        keywords: &["gatineau", "aylmer", "buckingham"],
    },
    Region {
        name: "saguenay",
        keywords: &["saguenay", "chicoutimi", "alma"],
    },
    Region {
        name: "gaspe",
        keywords: &["gaspe", "perce", "chandler"],
    },
    // Atlantic
    Region {
        name: "fredericton",
        keywords: &["fredericton", "oromocto"],
    },
    Region {
        name: "moncton",
        keywords: &["moncton", "dieppe", "riverview", "shediac"],
    },
    Region {
        name: "fundy",
        keywords: &["saint john", "st. stephen", "sussex"],
    },
    Region {
        name: "halifax",
        keywords: &["halifax", "dartmouth", "bedford", "sackville"],
    },
    Region {
        name: "cape breton",
        keywords: &["sydney", "glace bay", "north sydney", "baddeck"],
    },
    Region {
        name: "annapolis valley",
        keywords: &["kentville", "wolfville", "greenwood", "middleton"],
    },
    Region {
        name: "prince edward island",
        keywords: &["charlottetown", "summerside", "montague", "souris"],
    },
    Region {
        name: "avalon peninsula",
        keywords: &["st. john's", "mount pearl", "conception bay", "paradise"],
    },
    Region {
        name: "central newfoundland",
        keywords: &["gander", "grand falls-windsor", "lewisporte"],
    },
    Region {
        name: "west coast newfoundland",
        keywords: &["corner brook", "stephenville", "deer lake"],
    },
    Region {
        name: "labrador",
        keywords: &["happy valley-goose bay", "labrador city", "wabush"],
    },
    // North
    Region {
        name: "yukon",
        keywords: &["whitehorse", "dawson", "watson lake", "haines junction"],
    },
    Region {
        name: "great slave",
        keywords: &["yellowknife", "hay river", "fort smith", "behchoko"],
    },
    Region {
        name: "mackenzie valley",
        keywords: &["inuvik", "norman wells", "fort simpson"],
    },
    Region {
        name: "baffin",
        keywords: &["iqaluit", "pangnirtung", "pond inlet"],
    },
    Region {
        name: "kivalliq",
        keywords: &["rankin inlet", "arviat", "baker lake"],
    },
];
