//! Word lists for the bundled provider.

pub const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Aiden", "Amara", "Andre", "Beatrice", "Benjamin", "Camila", "Carlos", "Chloe",
    "Daniel", "Daria", "Elena", "Elijah", "Emma", "Felix", "Fiona", "Gabriel", "Grace", "Hannah",
    "Hugo", "Isaac", "Isla", "Jasper", "Julia", "Kai", "Keira", "Leo", "Lucia", "Marcus", "Maya",
    "Nadia", "Noah", "Olivia", "Oscar", "Priya", "Quentin", "Rosa", "Samuel", "Sofia", "Theo",
    "Uma", "Victor", "Willa", "Xavier", "Yara", "Zane",
];

pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Baker", "Castillo", "Chen", "Dubois", "Evans", "Fischer", "Garcia", "Hughes",
    "Ibrahim", "Jensen", "Kowalski", "Lopez", "Morgan", "Nakamura", "Nguyen", "O'Brien", "Patel",
    "Quinn", "Rossi", "Schmidt", "Silva", "Thompson", "Underwood", "Vasquez", "Walker", "Young",
    "Zimmerman",
];

pub const JOB_TITLES: &[&str] = &[
    "Account Manager", "Data Analyst", "Designer", "Engineer", "Facilitator", "Orchestrator",
    "Planner", "Product Manager", "Strategist", "Supervisor", "Technician", "Consultant",
];

pub const PREFIXES: &[&str] = &["Mr.", "Mrs.", "Ms.", "Miss", "Dr."];

pub const SEXES: &[&str] = &["female", "male"];

pub const DOMAIN_SUFFIXES: &[&str] = &["com", "net", "org", "info", "biz", "io"];

pub const FREE_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

pub const LOREM: &[&str] = &[
    "alias", "amet", "aperiam", "aut", "blanditiis", "commodi", "consequatur", "corporis",
    "culpa", "cumque", "debitis", "delectus", "dolor", "dolore", "dolorem", "eius", "eligendi",
    "error", "esse", "eveniet", "expedita", "facere", "fugiat", "harum", "illum", "impedit",
    "ipsum", "iure", "labore", "laborum", "magnam", "maxime", "minima", "molestiae", "nemo",
    "nihil", "nisi", "nobis", "numquam", "officia", "omnis", "optio", "pariatur", "perferendis",
    "placeat", "porro", "quaerat", "quia", "quibusdam", "quis", "ratione", "recusandae",
    "repellat", "rerum", "saepe", "sapiente", "sequi", "similique", "sint", "soluta", "tempora",
    "tenetur", "totam", "ullam", "vel", "velit", "veniam", "vero", "voluptas", "voluptatem",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Awesome", "Elegant", "Ergonomic", "Fantastic", "Generic", "Gorgeous", "Handcrafted",
    "Incredible", "Intelligent", "Licensed", "Practical", "Refined", "Rustic", "Sleek", "Small",
    "Tasty", "Unbranded",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Bamboo", "Bronze", "Ceramic", "Concrete", "Cotton", "Fresh", "Frozen", "Granite", "Marble",
    "Metal", "Plastic", "Rubber", "Soft", "Steel", "Wooden",
];

pub const PRODUCTS: &[&str] = &[
    "Bacon", "Ball", "Bike", "Car", "Chair", "Cheese", "Chicken", "Chips", "Computer", "Gloves",
    "Hat", "Keyboard", "Mouse", "Pants", "Pizza", "Salad", "Sausages", "Shirt", "Shoes", "Soap",
    "Table", "Towels",
];

pub const DEPARTMENTS: &[&str] = &[
    "Automotive", "Baby", "Beauty", "Books", "Clothing", "Computers", "Electronics", "Games",
    "Garden", "Grocery", "Health", "Home", "Industrial", "Jewelery", "Kids", "Movies", "Music",
    "Outdoors", "Shoes", "Sports", "Tools", "Toys",
];

pub const CITIES: &[&str] = &[
    "Ashford", "Bellmont", "Brookfield", "Cedar Falls", "Clearwater", "Easton", "Fairview",
    "Glenwood", "Greenville", "Harrisburg", "Kingston", "Lakewood", "Madison", "Milford",
    "Newport", "Oakland", "Riverside", "Salem", "Springfield", "Westfield",
];

pub const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Pine", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park", "Main",
    "Church", "Mill", "Sunset", "Highland",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Avenue", "Boulevard", "Court", "Drive", "Lane", "Parkway", "Place", "Road", "Street", "Way",
];

/// `(name, abbreviation)`
pub const STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Illinois", "IL"),
    ("Maine", "ME"),
    ("Michigan", "MI"),
    ("Nevada", "NV"),
    ("New York", "NY"),
    ("Ohio", "OH"),
    ("Oregon", "OR"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Washington", "WA"),
];

/// `(name, ISO 3166-1 alpha-2)`
pub const COUNTRIES: &[(&str, &str)] = &[
    ("Argentina", "AR"),
    ("Australia", "AU"),
    ("Brazil", "BR"),
    ("Canada", "CA"),
    ("Denmark", "DK"),
    ("Egypt", "EG"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("India", "IN"),
    ("Ireland", "IE"),
    ("Italy", "IT"),
    ("Japan", "JP"),
    ("Kenya", "KE"),
    ("Mexico", "MX"),
    ("Netherlands", "NL"),
    ("New Zealand", "NZ"),
    ("Norway", "NO"),
    ("Portugal", "PT"),
    ("South Korea", "KR"),
    ("Spain", "ES"),
    ("Sweden", "SE"),
    ("United Kingdom", "GB"),
    ("United States", "US"),
];

pub const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Ltd"];

pub const CATCH_PHRASE_ADJECTIVES: &[&str] = &[
    "Adaptive", "Balanced", "Centralized", "Cross-platform", "Decentralized", "Distributed",
    "Ergonomic", "Focused", "Integrated", "Multi-layered", "Optimized", "Proactive", "Robust",
    "Streamlined", "User-friendly",
];

pub const CATCH_PHRASE_DESCRIPTORS: &[&str] = &[
    "24/7", "asynchronous", "bottom-line", "contextually-based", "dynamic", "explicit",
    "global", "heuristic", "interactive", "modular", "real-time", "scalable", "zero tolerance",
];

pub const CATCH_PHRASE_NOUNS: &[&str] = &[
    "ability", "algorithm", "architecture", "capacity", "database", "framework", "hierarchy",
    "interface", "matrix", "middleware", "paradigm", "policy", "solution", "throughput",
];

pub const COLORS: &[&str] = &[
    "azure", "black", "blue", "cyan", "gold", "green", "grey", "indigo", "lavender", "lime",
    "magenta", "maroon", "mint green", "orange", "orchid", "pink", "plum", "purple", "red",
    "salmon", "silver", "tan", "teal", "turquoise", "violet", "white", "yellow",
];

pub const CURRENCY_CODES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "SEK"];

pub const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub const WEEKDAYS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
