//! Word pools for field synthesis.

pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Morgan", "Casey", "Riley", "Quinn", "Avery", "Taylor", "Harper", "Blake",
    "Logan", "Reese", "Cameron", "Dakota", "Emery", "Finley", "Hayden", "Kendall", "Marley",
    "Parker", "Rowan", "Sage", "Tatum", "Wren", "Elena", "Marcus", "Priya", "Diego", "Ingrid",
    "Kenji", "Amara", "Viktor", "Leila", "Tomas", "Freya", "Omar", "Nadia", "Henrik", "Yuki",
    "Sofia", "Mateo", "Anika", "Lars", "Zara", "Felix", "Mira", "Oscar", "Tessa",
];

pub const LAST_NAMES: &[&str] = &[
    "Chen", "Nakamura", "Petrov", "Santos", "Kim", "Hansen", "Okafor", "Moreau", "Singh",
    "Torres", "Andersen", "Park", "Johansson", "Fernandez", "Larsson", "Novak", "Ibrahim",
    "Costa", "Yamamoto", "Kowalski", "Tanaka", "Svensson", "Rossi", "Fischer", "Dubois",
    "Schmidt", "Popov", "Nguyen", "Jensen", "Colombo", "Olsen", "Bianchi", "Wagner", "Eriksson",
    "Ivanov", "Ortiz", "Reyes", "Hoffmann", "Nilsson", "Russo", "Delgado", "Berger", "Wolf",
    "Richter", "Bauer", "Sato", "Watanabe", "Suzuki",
];

pub const STREET_NAMES: &[&str] = &[
    "Harbor", "Elm", "Cedar", "Maple", "Willow", "Birch", "Juniper", "Linden", "Alder", "Laurel",
    "Summit", "Prairie", "Meadow", "Ridge", "Canyon", "Lakeview", "Hillcrest", "Granite",
    "Foundry", "Market", "Commerce", "Union", "Franklin", "Monroe",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Boulevard", "Lane", "Drive", "Court", "Way", "Terrace",
];

pub const CITIES: &[&str] = &[
    "Portside", "Riverton", "Oakdale", "Fairview", "Brookfield", "Lakewood", "Ashford",
    "Milltown", "Westbrook", "Clearwater", "Stonebridge", "Northgate", "Eastvale", "Kingsport",
    "Harborview", "Cedarville", "Maplewood", "Silverton", "Grandview", "Rockfield",
];

pub const REGIONS: &[&str] = &[
    "AL", "AZ", "CA", "CO", "FL", "GA", "IL", "IN", "MA", "MD", "MI", "MN", "NC", "NJ", "NV",
    "NY", "OH", "OR", "PA", "TN", "TX", "UT", "VA", "WA", "WI",
];

pub const COMPANY_STEMS: &[&str] = &[
    "Acme", "Apex", "Atlas", "Beacon", "Borealis", "Cascade", "Cobalt", "Crestline", "Delta",
    "Evergreen", "Fulcrum", "Granite", "Halcyon", "Ironwood", "Keystone", "Lattice", "Meridian",
    "Northwind", "Obsidian", "Pinnacle", "Quarry", "Redwood", "Sable", "Summit", "Tidewater",
    "Vanguard", "Westfield", "Zenith",
];

pub const COMPANY_KINDS: &[&str] = &[
    "Logistics", "Dynamics", "Systems", "Holdings", "Industries", "Analytics", "Partners",
    "Manufacturing", "Consulting", "Robotics", "Materials", "Networks", "Labs", "Ventures",
    "Solutions", "Group",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Ltd", "Corp", "Co"];

pub const TLDS: &[&str] = &["com", "net", "io", "co", "example"];

pub const FREE_MAIL_HOSTS: &[&str] = &[
    "example.com",
    "example.net",
    "mailbox.example",
    "inbox.example",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Refined", "Rustic", "Sleek", "Ergonomic", "Incredible", "Practical", "Handcrafted",
    "Licensed", "Generic", "Modular", "Intelligent", "Durable",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Granite", "Cotton", "Concrete", "Rubber", "Bronze", "Plastic", "Fresh",
];

pub const PRODUCT_NOUNS: &[&str] = &[
    "Table", "Chair", "Keyboard", "Gloves", "Computer", "Towels", "Bike", "Lamp", "Shirt",
    "Sensor", "Pallet", "Fixture",
];

pub const DEPARTMENTS: &[&str] = &[
    "Outdoors", "Electronics", "Industrial", "Automotive", "Garden", "Tools", "Health", "Home",
    "Grocery", "Sports",
];

pub const LOREM_WORDS: &[&str] = &[
    "vero", "porro", "quidem", "magni", "harum", "tempora", "ratione", "soluta", "incidunt",
    "aliquid", "expedita", "maxime", "nostrum", "dolorem", "facilis", "voluptas", "commodi",
    "saepe", "eligendi", "natus",
];

pub const BUZZ_VERBS: &[&str] = &[
    "streamline", "orchestrate", "scale", "leverage", "optimize", "integrate", "consolidate",
    "automate",
];

pub const BUZZ_NOUNS: &[&str] = &[
    "supply chains",
    "fulfillment pipelines",
    "revenue channels",
    "partner networks",
    "field operations",
    "quarterly rollouts",
    "procurement workflows",
];
