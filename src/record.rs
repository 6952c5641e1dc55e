use std::fmt;

/// Canonical column lists. Both sinks derive their headers from these and
/// from nothing else, so the table and the CSV can never drift apart.
const FULL_HEADERS: [&str; 6] = [
    "Course Name",
    "Course Description",
    "Study Options",
    "Modules",
    "Topics",
    "Duration",
];
const CORE_HEADERS: [&str; 3] = ["Course Name", "Course Description", "Study Options"];

/// Per-run choice between the 6-field and the 3-field record shape.
///
/// One shape per run; the assembler, the table and the CSV all consult the
/// same value, never mixing shapes within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldShape {
    pub include_module_stats: bool,
}

impl FieldShape {
    pub const FULL: FieldShape = FieldShape {
        include_module_stats: true,
    };
    pub const BASIC: FieldShape = FieldShape {
        include_module_stats: false,
    };

    pub fn headers(self) -> &'static [&'static str] {
        if self.include_module_stats {
            &FULL_HEADERS
        } else {
            &CORE_HEADERS
        }
    }
}

/// Enrollment modes recognized on detail pages. `ALL` fixes the evaluation
/// and rendering order: full-time before flex-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyMode {
    FullTime,
    FlexTime,
}

impl StudyMode {
    pub const ALL: [StudyMode; 2] = [StudyMode::FullTime, StudyMode::FlexTime];

    /// The literal link text on the site. Matching vocabulary, not UI copy;
    /// kept verbatim and never localized.
    pub fn label(self) -> &'static str {
        match self {
            StudyMode::FullTime => "Навчатися повний день",
            StudyMode::FlexTime => "Навчатися у вільний час",
        }
    }
}

/// Course description: extracted text or one of its sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Text(String),
    /// Block present but its text is empty.
    Empty,
    /// Block absent from the detail page.
    NotFound,
    /// Detail-page fetch failed.
    FetchError,
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::Text(text) => f.write_str(text),
            Description::Empty => f.write_str("Not available"),
            Description::NotFound => f.write_str("Description not found"),
            Description::FetchError => f.write_str("Error fetching description"),
        }
    }
}

/// Study options found on the detail page, in declaration order. An empty
/// set is a real outcome and renders as its own sentinel, never as "".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyOptions {
    Modes(Vec<StudyMode>),
    FetchError,
}

impl fmt::Display for StudyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyOptions::Modes(modes) if modes.is_empty() => {
                f.write_str("No study options available")
            }
            StudyOptions::Modes(modes) => {
                let labels: Vec<&str> = modes.iter().map(|m| m.label()).collect();
                f.write_str(&labels.join(", "))
            }
            StudyOptions::FetchError => f.write_str("Error fetching study options"),
        }
    }
}

/// Module count. "Not found" covers both a missing container and a container
/// with zero items; it is a sentinel, not a zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleCount {
    Counted(usize),
    NotFound,
    FetchError,
}

impl fmt::Display for ModuleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleCount::Counted(n) => write!(f, "{n}"),
            ModuleCount::NotFound => f.write_str("Not found"),
            ModuleCount::FetchError => f.write_str("Error"),
        }
    }
}

/// Topic total across modules. Zero is a valid total, distinct from any
/// sentinel; only a failed fetch produces a non-numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicCount {
    Total(u32),
    FetchError,
}

impl fmt::Display for TopicCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopicCount::Total(n) => write!(f, "{n}"),
            TopicCount::FetchError => f.write_str("Error"),
        }
    }
}

/// Course duration, free text from the last matching feature row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Duration {
    Text(String),
    NotFound,
    FetchError,
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duration::Text(text) => f.write_str(text),
            Duration::NotFound => f.write_str("Not found"),
            Duration::FetchError => f.write_str("Error"),
        }
    }
}

/// The module/topic/duration block carried only by 6-field records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStats {
    pub modules: ModuleCount,
    pub topics: TopicCount,
    pub duration: Duration,
}

/// One course, assembled exactly once and never mutated afterwards.
///
/// Every field is always renderable: extractors substitute sentinels for
/// anything absent or failed, so no sink ever sees a null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub name: String,
    pub description: Description,
    pub study_options: StudyOptions,
    /// `Some` iff the run uses the 6-field shape.
    pub module_stats: Option<ModuleStats>,
}

impl CourseRecord {
    /// Field values in canonical column order.
    pub fn field_values(&self) -> Vec<String> {
        let mut values = vec![
            self.name.clone(),
            self.description.to_string(),
            self.study_options.to_string(),
        ];
        if let Some(stats) = &self.module_stats {
            values.push(stats.modules.to_string());
            values.push(stats.topics.to_string());
            values.push(stats.duration.to_string());
        }
        values
    }
}

/// The ordered record set produced by one run. Order is listing-page order;
/// duplicates are kept as-is.
#[derive(Debug, Clone)]
pub struct Catalog {
    shape: FieldShape,
    records: Vec<CourseRecord>,
}

impl Catalog {
    pub fn new(shape: FieldShape, records: Vec<CourseRecord>) -> Catalog {
        debug_assert!(
            records
                .iter()
                .all(|r| r.module_stats.is_some() == shape.include_module_stats),
            "record shape does not match catalog shape"
        );
        Catalog { shape, records }
    }

    pub fn empty(shape: FieldShape) -> Catalog {
        Catalog {
            shape,
            records: Vec::new(),
        }
    }

    pub fn shape(&self) -> FieldShape {
        self.shape
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.shape.headers()
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── Tests ──
