//! Static catalog of service lines and their capabilities.
//!
//! The catalog is built once by the host page and never mutated, so the
//! flattened index of every capability is stable for the life of the app.

#[derive(Debug, Clone, PartialEq)]
pub struct Capability {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub description: String,
}

impl Capability {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceLine {
    pub name: String,
    pub capabilities: Vec<Capability>,
}

impl ServiceLine {
    pub fn new(name: impl Into<String>, capabilities: Vec<Capability>) -> Self {
        Self {
            name: name.into(),
            capabilities,
        }
    }
}

/// Ordered service lines plus the flattened concatenation of their
/// capabilities, in line order.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCatalog {
    lines: Vec<ServiceLine>,
    flat: Vec<Capability>,
}

impl ServiceCatalog {
    pub fn new(lines: Vec<ServiceLine>) -> Self {
        let flat = lines
            .iter()
            .flat_map(|line| line.capabilities.iter().cloned())
            .collect();
        Self { lines, flat }
    }

    /// Total capability count across all lines.
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    pub fn lines(&self) -> &[ServiceLine] {
        &self.lines
    }

    /// Capability at a flattened index.
    pub fn capability(&self, index: usize) -> Option<&Capability> {
        self.flat.get(index)
    }

    /// Capability titles in flattened order, for the service dropdown.
    pub fn titles(&self) -> Vec<String> {
        self.flat.iter().map(|cap| cap.title.clone()).collect()
    }

    /// Name of the line owning the given flattened index, by accumulating
    /// capability counts line by line. Falls back to the first line when the
    /// index is out of range.
    pub fn line_of(&self, index: usize) -> Option<&str> {
        let mut count = 0;
        for line in &self.lines {
            count += line.capabilities.len();
            if index < count {
                return Some(&line.name);
            }
        }
        self.lines.first().map(|line| line.name.as_str())
    }

    /// Flattened index of the first capability of the named line, or `None`
    /// for an unknown name.
    pub fn first_index_of_line(&self, name: &str) -> Option<usize> {
        let mut start = 0;
        for line in &self.lines {
            if line.name == name {
                return Some(start);
            }
            start += line.capabilities.len();
        }
        None
    }
}

/// The production catalog: five service lines of three capabilities each.
pub fn default_catalog() -> ServiceCatalog {
    ServiceCatalog::new(vec![
        ServiceLine::new(
            "Language & Communication",
            vec![
                Capability::new(
                    0,
                    "Language Services",
                    "💬",
                    "Professional translation and localization services.",
                ),
                Capability::new(
                    1,
                    "Content Writing",
                    "✍️",
                    "High-quality content creation for various purposes.",
                ),
                Capability::new(
                    2,
                    "Editing Services",
                    "📝",
                    "Polishing and perfecting your written materials.",
                ),
            ],
        ),
        ServiceLine::new(
            "Business Support",
            vec![
                Capability::new(
                    3,
                    "Business Research",
                    "🔍",
                    "Comprehensive research for business insights.",
                ),
                Capability::new(
                    4,
                    "Data Processing",
                    "📊",
                    "Efficient processing of various data types.",
                ),
                Capability::new(
                    5,
                    "Virtual Assistance",
                    "👩‍💼",
                    "Remote support for your business needs.",
                ),
            ],
        ),
        ServiceLine::new(
            "Digital Solutions",
            vec![
                Capability::new(
                    6,
                    "Web Development",
                    "💻",
                    "Custom website creation and maintenance.",
                ),
                Capability::new(
                    7,
                    "App Development",
                    "📱",
                    "Mobile application development for all platforms.",
                ),
                Capability::new(
                    8,
                    "Digital Marketing",
                    "📣",
                    "Promoting your business in the digital landscape.",
                ),
            ],
        ),
        ServiceLine::new(
            "Creative Media",
            vec![
                Capability::new(
                    9,
                    "Graphic Design",
                    "🎨",
                    "Visual content creation for various media.",
                ),
                Capability::new(
                    10,
                    "Video Production",
                    "🎥",
                    "Professional video creation and editing.",
                ),
                Capability::new(
                    11,
                    "Animation",
                    "🎬",
                    "Engaging animated content for your brand.",
                ),
            ],
        ),
        ServiceLine::new(
            "Technical Support",
            vec![
                Capability::new(12, "IT Services", "🖥️", "Technical support and IT solutions."),
                Capability::new(
                    13,
                    "Data Analysis",
                    "📈",
                    "Making sense of your data through analysis.",
                ),
                Capability::new(
                    14,
                    "Cloud Solutions",
                    "☁️",
                    "Efficient cloud-based services and support.",
                ),
            ],
        ),
    ])
}
