// src/catalog.rs

/// Root of the Canadian Industry Statistics portal. Endpoint paths and NAICS
/// codes are appended to this to form report URLs.
pub static BASE_URL: &str = "https://ised-isde.canada.ca/app/ixb/cis";

/// The five statistical report types published per NAICS code, as
/// `(endpoint name, URL path segment)`. Slice order is the canonical endpoint
/// order used when flattening and reporting.
pub static ENDPOINTS: &[(&str, &str)] = &[
    ("businesses", "businesses-entreprises"),
    ("summary", "summary-sommaire"),
    ("performance", "performance"),
    ("gdp", "gdp-pid"),
    ("trade", "trade-commerce"),
];

/// Complete catalogue of NAICS codes available on the portal, as
/// `(code, industry name)`. Codes run from 2-digit sectors down to a sample
/// 5-digit industry; a few are hyphenated ranges ("31-33"). Slice order is the
/// canonical catalogue order: batching, flattened output and report
/// tie-breaking all follow it.
pub static NAICS_CODES: &[(&str, &str)] = &[
    // 2-digit sectors
    ("11", "Agriculture, forestry, fishing and hunting"),
    ("21", "Mining, quarrying, and oil and gas extraction"),
    ("22", "Utilities"),
    ("23", "Construction"),
    ("31-33", "Manufacturing"),
    ("41", "Wholesale trade"),
    ("44-45", "Retail trade"),
    ("48-49", "Transportation and warehousing"),
    ("51", "Information and cultural industries"),
    ("52", "Finance and insurance"),
    ("53", "Real estate and rental and leasing"),
    ("54", "Professional, scientific and technical services"),
    ("55", "Management of companies and enterprises"),
    (
        "56",
        "Administrative and support, waste management and remediation services",
    ),
    ("61", "Educational services"),
    ("62", "Health care and social assistance"),
    ("71", "Arts, entertainment and recreation"),
    ("72", "Accommodation and food services"),
    ("81", "Other services (except public administration)"),
    ("91", "Public administration"),
    // 3-digit subsectors - Agriculture
    ("111", "Crop production"),
    ("112", "Animal production and aquaculture"),
    ("113", "Forestry and logging"),
    ("114", "Fishing, hunting and trapping"),
    ("115", "Support activities for agriculture and forestry"),
    // 3-digit subsectors - Mining
    ("211", "Oil and gas extraction"),
    ("212", "Mining and quarrying (except oil and gas)"),
    ("213", "Support activities for mining, and oil and gas extraction"),
    // 3-digit subsectors - Utilities
    ("221", "Utilities"),
    // 3-digit subsectors - Construction
    ("236", "Construction of buildings"),
    ("237", "Heavy and civil engineering construction"),
    ("238", "Specialty trade contractors"),
    // 3-digit subsectors - Manufacturing
    ("311", "Food manufacturing"),
    ("312", "Beverage and tobacco product manufacturing"),
    ("313", "Textile mills"),
    ("314", "Textile product mills"),
    ("315", "Clothing manufacturing"),
    ("316", "Leather and allied product manufacturing"),
    ("321", "Wood product manufacturing"),
    ("322", "Paper manufacturing"),
    ("323", "Printing and related support activities"),
    ("324", "Petroleum and coal product manufacturing"),
    ("325", "Chemical manufacturing"),
    ("326", "Plastics and rubber products manufacturing"),
    ("327", "Non-metallic mineral product manufacturing"),
    ("331", "Primary metal manufacturing"),
    ("332", "Fabricated metal product manufacturing"),
    ("333", "Machinery manufacturing"),
    ("334", "Computer and electronic product manufacturing"),
    ("335", "Electrical equipment, appliance and component manufacturing"),
    ("336", "Transportation equipment manufacturing"),
    ("337", "Furniture and related product manufacturing"),
    ("339", "Miscellaneous manufacturing"),
    // 3-digit subsectors - Transportation
    ("481", "Air transportation"),
    ("482", "Rail transportation"),
    ("483", "Water transportation"),
    ("484", "Truck transportation"),
    ("485", "Transit and ground passenger transportation"),
    ("486", "Pipeline transportation"),
    ("487", "Scenic and sightseeing transportation"),
    ("488", "Support activities for transportation"),
    ("491", "Postal service"),
    ("492", "Couriers and messengers"),
    ("493", "Warehousing and storage"),
    // 3-digit subsectors - Information
    ("511", "Publishing industries"),
    ("512", "Motion picture and sound recording industries"),
    ("515", "Broadcasting (except Internet)"),
    ("517", "Telecommunications"),
    ("518", "Data processing, hosting, and related services"),
    ("519", "Other information services"),
    // 3-digit subsectors - Finance
    ("521", "Monetary authorities - central bank"),
    ("522", "Credit intermediation and related activities"),
    (
        "523",
        "Securities, commodity contracts, and other financial investment and related activities",
    ),
    ("524", "Insurance carriers and related activities"),
    ("526", "Funds and other financial vehicles"),
    // 3-digit subsectors - Real Estate
    ("531", "Real estate"),
    ("532", "Rental and leasing services"),
    ("533", "Lessors of non-financial intangible assets"),
    // 3-digit subsectors - Professional Services
    ("541", "Professional, scientific and technical services"),
    // 3-digit subsectors - Administrative
    ("561", "Administrative and support services"),
    // 3-digit subsectors - Health Care
    ("621", "Ambulatory health care services"),
    ("622", "Hospitals"),
    ("623", "Nursing and residential care facilities"),
    ("624", "Social assistance"),
    // 3-digit subsectors - Arts
    ("711", "Performing arts, spectator sports and related industries"),
    ("712", "Heritage institutions"),
    ("713", "Amusement, gambling and recreation industries"),
    // 3-digit subsectors - Accommodation
    ("721", "Accommodation services"),
    ("722", "Food services and drinking places"),
    // 3-digit subsectors - Other Services
    ("811", "Repair and maintenance"),
    ("812", "Personal and laundry services"),
    (
        "813",
        "Religious, grant-making, civic, professional and similar organizations",
    ),
    ("814", "Private households"),
    // 3-digit subsectors - Public Administration
    ("911", "Federal government public administration"),
    ("912", "Provincial and territorial public administration"),
    ("913", "Local, municipal and regional public administration"),
    ("914", "Aboriginal public administration"),
    ("919", "International and other extra-territorial public administration"),
    // 4-digit industry groups - Utilities
    ("2211", "Electric power generation, transmission and distribution"),
    ("2212", "Natural gas distribution"),
    ("2213", "Water, sewage and other systems"),
    // 4-digit - Food Manufacturing
    ("3111", "Animal food manufacturing"),
    ("3112", "Grain and oilseed milling"),
    ("3113", "Sugar and confectionery product manufacturing"),
    (
        "3114",
        "Fruit and vegetable preserving and specialty food manufacturing",
    ),
    ("3115", "Dairy product manufacturing"),
    ("3116", "Meat product manufacturing"),
    ("3117", "Seafood product preparation and packaging"),
    ("3118", "Bakeries and tortilla manufacturing"),
    ("3119", "Other food manufacturing"),
    // 4-digit - Professional Services
    ("5411", "Legal services"),
    (
        "5412",
        "Accounting, tax preparation, bookkeeping and payroll services",
    ),
    ("5413", "Architectural, engineering and related services"),
    ("5414", "Specialized design services"),
    ("5415", "Computer systems design and related services"),
    ("5416", "Management, scientific and technical consulting services"),
    ("5417", "Scientific research and development services"),
    ("5418", "Advertising, public relations, and related services"),
    ("5419", "Other professional, scientific and technical services"),
    // 5-digit industry - Sample
    ("31111", "Animal food manufacturing"),
];
