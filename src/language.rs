//! ABAP language tables: keyword taxonomy, category map, and separators.
//!
//! These are compiled-in constants. The taxonomy and category tables are
//! *ordered* slices rather than hash maps: declaration order is the
//! documented tie-break for classification, so iteration order must be
//! explicit and stable.

/// Reserved type label when no keyword set matches at all.
pub const FALLBACK_TYPE: &str = "GENERIC_ABAP";

/// Reserved category when a type label belongs to no category.
pub const FALLBACK_CATEGORY: &str = "GENERIC";

/// ABAP object types and the keywords that commonly appear in them.
///
/// Keywords are lowercase and matched as case-insensitive substrings of the
/// document content. Declaration order is significant: it breaks ties
/// between types with equal match ratios.
pub const DOCUMENT_KEYWORDS: &[(&str, &[&str])] = &[
    // Database objects & CDS views
    (
        "DATABASE TABLE",
        &[
            "tablecategory",
            "deliveryclass",
            "datamaintenance",
            "define",
            "table",
            "key",
            "include",
        ],
    ),
    ("STRUCTURE", &["define", "structure", "key", "include"]),
    // ABAP RESTful Application Programming Model (RAP)
    (
        "PROJECTION ENTITY",
        &[
            "define",
            "root",
            "view",
            "entity",
            "provider",
            "contract",
            "transactional_query",
            "projection",
        ],
    ),
    (
        "ROOT ENTITY",
        &["define", "root", "view", "entity", "select", "from", "join"],
    ),
    (
        "ENTITY",
        &["define", "view", "entity", "select", "from", "join"],
    ),
    (
        "VALUE HELP ENTITY",
        &[
            "objectmodel",
            "datacategory",
            "#value_help",
            "servicequality",
            "define",
            "view",
            "entity",
            "select",
            "from",
            "join",
        ],
    ),
    (
        "METADATA ENTITY",
        &["metadata", "layer", "annotate", "withentity"],
    ),
    ("ABSTRACT ENTITY", &["define", "abstract", "entity"]),
    ("CUSTOM ENTITY", &["define", "custom", "entity"]),
    ("SERVICE DEFINITION", &["define", "service", "expose"]),
    (
        "BEHAVIOR PROJECTION",
        &[
            "projection",
            "strict",
            "define",
            "behavior",
            "use",
            "create",
            "update",
            "delete",
            "action",
            "determination",
            "validation",
        ],
    ),
    (
        "UNMANAGED BEHAVIOR DEFINITION",
        &[
            "unmanaged",
            "implementation",
            "class",
            "define",
            "behavior",
            "for",
        ],
    ),
    (
        "MANAGED BEHAVIOR DEFINITION",
        &[
            "managed",
            "implementation",
            "class",
            "define",
            "behavior",
            "for",
        ],
    ),
    // Object-oriented programming
    (
        "CLASS",
        &[
            "class",
            "definition",
            "create",
            "interfaces",
            "public",
            "protected",
            "private",
            "final",
            "section",
            "methods",
            "implementation",
        ],
    ),
    // Classical ABAP
    (
        "REPORT PROGRAM",
        &[
            "report",
            "selection-screen",
            "parameters",
            "select-options",
            "initialization",
            "at selection-screen",
            "start-of-selection",
            "end-of-selection",
            "top-of-page",
            "end-of-page",
            "perform",
            "form",
            "endform",
        ],
    ),
    // Program components
    ("INCLUDE PROGRAM", &["perform", "form", "endform"]),
    // Function modules & exits
    (
        "FUNCTION MODULE",
        &[
            "function",
            "importing",
            "exporting",
            "changing",
            "tables",
            "exceptions",
            "value",
            "optional",
            "endfunction",
        ],
    ),
    (
        "EXITS",
        &[
            "call",
            "user_exit",
            "customer",
            "function",
            "importing",
            "exporting",
            "changing",
            "tables",
            "exceptions",
            "value",
            "optional",
            "endfunction",
        ],
    ),
    // Other dictionary objects
    (
        "LOCK OBJECT",
        &["table", "lock mode", "lock", "unlock", "lock parameters"],
    ),
    (
        "NUMBER RANGE",
        &[
            "number length domain",
            "number range number",
            "number range status",
        ],
    ),
];

/// High-level categorization of document types, used downstream to select
/// the matching prompt template. A type belongs to the first category that
/// names it.
pub const DOCUMENT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "DATABASE",
        &[
            "DATABASE TABLE",
            "STRUCTURE",
            "PROJECTION ENTITY",
            "ROOT ENTITY",
            "ENTITY",
            "VALUE HELP ENTITY",
            "METADATA ENTITY",
            "ABSTRACT ENTITY",
            "CUSTOM ENTITY",
            "LOCK OBJECT",
        ],
    ),
    ("FUNCTION MODULE", &["FUNCTION MODULE", "EXITS"]),
    ("OBJECT ORIENTED", &["CLASS"]),
    (
        "RAP FRAMEWORK",
        &[
            "SERVICE DEFINITION",
            "BEHAVIOR PROJECTION",
            "UNMANAGED BEHAVIOR DEFINITION",
            "MANAGED BEHAVIOR DEFINITION",
        ],
    ),
    ("CLASSICAL", &["REPORT PROGRAM", "INCLUDE PROGRAM"]),
    ("OTHER", &["NUMBER RANGE"]),
];

/// Structural boundary patterns for the recursive splitter, ordered from
/// most specific to least specific. Each entry is a regular expression;
/// order drives which boundary the splitter tries first.
pub const SEPARATORS: &[&str] = &[
    // RAP objects & CDS definitions
    "\nDEFINE ROOT VIEW ENTITY",
    "\nDEFINE VIEW ENTITY",
    "\nDEFINE ABSTRACT ENTITY",
    "\nDEFINE CUSTOM ENTITY",
    "\nDEFINE VIEW",
    "\nDEFINE TABLE FUNCTION",
    "\nANNOTATE ENTITY",
    "\nDEFINE ACCESS CONTROL",
    "\nDEFINE SERVICE",
    "\nUNMANAGED IMPLEMENTATION IN CLASS",
    "\nMANAGED IMPLEMENTATION IN CLASS",
    "\nDEFINE BEHAVIOR FOR",
    // Class, method & interface definitions
    "\nCLASS ",
    "\nENDCLASS.",
    "\nMETHOD ",
    "\nENDMETHOD.",
    "\nPUBLIC SECTION.",
    "\nPROTECTED SECTION.",
    "\nPRIVATE SECTION.",
    "\nINTERFACE ",
    "\nENDINTERFACE.",
];
