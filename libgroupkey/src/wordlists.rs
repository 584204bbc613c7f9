//! Built-in dictionaries: proper names and the common-word fallback
//! corpus.
//!
//! The name data follows US census frequency lists; the common-word
//! corpus is ordered by overall frequency so fallback matches surface the
//! likeliest word first. Both are plain data — the lookup services over
//! them live in `libgroupkey-core`.

use libgroupkey_core::NameDictionary;
use once_cell::sync::Lazy;

/// Common first names, most frequent first.
pub const FIRST_NAMES: &[&str] = &[
    // Male names
    "JAMES", "ROBERT", "JOHN", "MICHAEL", "DAVID", "WILLIAM", "RICHARD", "CHARLES", "JOSEPH",
    "THOMAS", "CHRISTOPHER", "DANIEL", "PAUL", "MARK", "DONALD", "STEVEN", "KENNETH", "JOSHUA",
    "KEVIN", "BRIAN", "GEORGE", "TIMOTHY", "RONALD", "JASON", "EDWARD", "JEFFREY", "RYAN",
    "JACOB", "GARY", "NICHOLAS", "ERIC", "JONATHAN", "STEPHEN", "LARRY", "JUSTIN", "SCOTT",
    "BRANDON", "BENJAMIN", "SAMUEL", "FRANK", "MATTHEW", "GREGORY", "RAYMOND", "ALEXANDER",
    "PATRICK", "JACK", "DENNIS", "JERRY",
    // Female names
    "MARY", "PATRICIA", "JENNIFER", "LINDA", "ELIZABETH", "BARBARA", "SUSAN", "JESSICA", "SARAH",
    "KAREN", "NANCY", "LISA", "BETTY", "HELEN", "SANDRA", "DONNA", "CAROL", "RUTH", "SHARON",
    "MICHELLE", "LAURA", "KIMBERLY", "DEBORAH", "DOROTHY", "AMY", "ANGELA", "ASHLEY", "BRENDA",
    "EMMA", "OLIVIA", "CYNTHIA", "MARIE", "JANET", "CATHERINE", "FRANCES", "CHRISTINE",
    "SAMANTHA", "DEBRA", "RACHEL", "CAROLYN", "VIRGINIA", "MARIA", "HEATHER", "DIANE", "JULIE",
    "JOYCE", "VICTORIA",
    // Additional popular names
    "NOAH", "LIAM", "ETHAN", "MASON", "LOGAN", "LUCAS", "HENRY", "OWEN", "CALEB", "SOPHIA",
    "ISABELLA", "CHARLOTTE", "AMELIA", "MIA", "HARPER", "EVELYN", "ABIGAIL", "EMILY", "ELLA",
    "CAMILA", "LUNA", "SOFIA", "AVERY", "MILA", "ARIA",
];

/// Common surnames.
pub const SURNAMES: &[&str] = &[
    "SMITH", "JOHNSON", "WILLIAMS", "BROWN", "JONES", "GARCIA", "MILLER", "DAVIS", "RODRIGUEZ",
    "MARTINEZ", "HERNANDEZ", "LOPEZ", "GONZALEZ", "WILSON", "ANDERSON", "THOMAS", "TAYLOR",
    "MOORE", "JACKSON", "MARTIN", "LEE", "PEREZ", "THOMPSON", "WHITE", "HARRIS", "SANCHEZ",
    "CLARK", "RAMIREZ", "LEWIS", "ROBINSON", "WALKER", "YOUNG", "ALLEN", "KING", "WRIGHT",
    "SCOTT", "TORRES", "NGUYEN", "HILL", "FLORES", "GREEN", "ADAMS", "NELSON", "BAKER", "HALL",
    "RIVERA", "CAMPBELL", "MITCHELL", "CARTER", "ROBERTS", "GOMEZ", "PHILLIPS", "EVANS",
    "TURNER", "DIAZ", "PARKER", "CRUZ", "EDWARDS", "COLLINS", "REYES", "STEWART", "MORRIS",
    "MORALES", "MURPHY", "COOK", "ROGERS", "GUTIERREZ", "ORTIZ", "MORGAN", "COOPER", "PETERSON",
    "BAILEY", "REED", "KELLY", "HOWARD", "RAMOS", "KIM", "COX", "WARD", "RICHARDSON", "WATSON",
    "BROOKS", "CHAVEZ", "WOOD", "BENNETT", "GRAY", "MENDOZA", "RUIZ", "HUGHES",
];

/// Common English words, most frequent first. The fallback table derives
/// each word's button sequence from the active layout at startup, so one
/// corpus serves every layout.
pub const COMMON_WORDS: &[&str] = &[
    // 1-2 letters
    "A", "I", "TO", "IT", "IN", "IS", "AS", "AT", "HE", "AN", "OR", "ON", "BE", "WE", "SO", "NO",
    "IF", "MY", "UP", "GO", "ME", "DO", "US", "AM",
    // 3 letters
    "THE", "AND", "YOU", "NOT", "CAN", "HAD", "HER", "HAS", "HIS", "ONE", "OUT", "SHE", "HOW",
    "ARE", "BUT", "ALL", "FOR", "WAS", "DAY", "GET", "MAN", "NEW", "NOW", "OLD", "SEE", "TWO",
    "WAY", "WHO", "OUR", "SAY", "TOO", "USE", "TIE",
    // 4 letters
    "THAT", "THIS", "HAVE", "THEY", "THEN", "THEM", "THAN", "HEAR", "HERE", "HELP", "WITH",
    "FROM", "WORD", "WHAT", "WHEN", "YOUR", "SAID", "EACH", "TIME", "WILL", "HATE", "HINT",
    "TONE", "NONE", "NOTE", "NEED", "NEAT", "MAKE", "LIKE", "LOOK", "COME", "GOOD", "SOME",
    // 5 letters
    "HELLO", "THERE", "THESE", "THREE", "THOSE", "THANK", "NIGHT", "OTHER", "HANDS", "HOUSE",
    "EARTH", "HEART", "ENTER", "EATEN", "TEETH", "WHICH", "THEIR", "ABOUT", "WOULD", "WRITE",
    "FIRST", "WATER", "AFTER", "WHERE", "RIGHT", "THINK", "SOUND", "GREAT", "PLACE",
];

static BUILTIN_NAMES: Lazy<NameDictionary> = Lazy::new(|| {
    NameDictionary::from_names(FIRST_NAMES.iter().chain(SURNAMES.iter()))
});

/// The built-in name dictionary (first names + surnames, deduplicated).
pub fn builtin_names() -> &'static NameDictionary {
    &BUILTIN_NAMES
}

/// The built-in fallback word corpus.
pub fn common_words() -> &'static [&'static str] {
    COMMON_WORDS
}
