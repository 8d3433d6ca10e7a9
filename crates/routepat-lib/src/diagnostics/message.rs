use rowan::TextRange;

/// Diagnostic kinds, grouped by the pass that reports them.
///
/// A kind is the resource key of a message: the text is looked up through a
/// [`MessageCatalog`] when the diagnostic is read, and filled with the arguments the
/// reporting pass recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Lexical shape of literals and separators
    TildeNotFollowedBySlash,
    LiteralQuestionMark,
    IncompleteParameter,
    ConsecutiveSeparators,
    UnexpectedToken,

    // Parameter syntax
    UnescapedBrace,
    InvalidParameterName,
    CatchAllCannotBeOptional,
    OptionalCannotHaveDefault,

    // Segment structure
    CatchAllNotLast,
    CatchAllInComplexSegment,
    ConsecutiveParameters,

    // Replacement tokens
    EmptyReplacement,
    UnclosedReplacement,
    ImbalancedReplacementDelimiters,

    // Dialect capability gates
    CatchAllNotSupported,
    TwoAsteriskCatchAllNotSupported,
    ComplexSegmentNotSupported,
    DefaultValueNotSupported,

    // Cross-parameter validation
    DuplicateParameter,
    OptionalNotAtEndOfSegment,
    OptionalPrecededByInvalidSegment,
    RequiredAfterOptional,

    // Binding
    RouteParameterUnused,
    ParameterConstraintMissing,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::RouteParameterUnused | Self::ParameterConstraintMissing => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// English message template. Each `{}` is filled with one argument, in order.
    pub fn template(&self) -> &'static str {
        match self {
            Self::TildeNotFollowedBySlash => {
                "The route template cannot start with a '~' character unless followed by a '/'."
            }
            Self::LiteralQuestionMark => {
                "The literal section '{}' is invalid. Literal sections cannot contain the '?' character."
            }
            Self::IncompleteParameter => {
                "There is an incomplete parameter in the route template. Check that each '{' character has a matching '}' character."
            }
            Self::ConsecutiveSeparators => {
                "The route template separator character '/' cannot appear consecutively. It must be separated by either a parameter or a literal value."
            }
            Self::UnexpectedToken => "Unexpected '{}' in the route template.",

            Self::UnescapedBrace => {
                "In a route parameter, '{' and '}' must be escaped with '{{' and '}}'."
            }
            Self::InvalidParameterName => {
                "The route parameter name '{}' is invalid. Route parameter names must be non-empty and cannot contain these characters: '{', '}', '/'. The '?' character marks a parameter as optional, and can occur only at the end of the parameter. The '*' character marks a parameter as catch-all, and can occur only at the start of the parameter."
            }
            Self::CatchAllCannotBeOptional => "A catch-all parameter cannot be marked optional.",
            Self::OptionalCannotHaveDefault => "An optional parameter cannot have default value.",

            Self::CatchAllNotLast => {
                "A catch-all parameter can only appear as the last segment of the route template."
            }
            Self::CatchAllInComplexSegment => {
                "A path segment that contains more than one section, such as a literal section or a parameter, cannot contain a catch-all parameter."
            }
            Self::ConsecutiveParameters => {
                "A path segment cannot contain two consecutive parameters. They must be separated by a '/' or by a literal string."
            }

            Self::EmptyReplacement => "An empty replacement token ('[]') is not allowed.",
            Self::UnclosedReplacement => "A replacement token is not closed.",
            Self::ImbalancedReplacementDelimiters => "Token delimiters ('[', ']') are imbalanced.",

            Self::CatchAllNotSupported => {
                "Catch-all parameters are not supported by the '{}' route dialect."
            }
            Self::TwoAsteriskCatchAllNotSupported => {
                "The '**' catch-all form is not supported by the '{}' route dialect."
            }
            Self::ComplexSegmentNotSupported => {
                "The segment '{}' is invalid. A path segment can contain only one literal or parameter in the '{}' route dialect."
            }
            Self::DefaultValueNotSupported => {
                "Default values are not supported by the '{}' route dialect."
            }

            Self::DuplicateParameter => {
                "The route parameter name '{}' appears more than one time in the route template."
            }
            Self::OptionalNotAtEndOfSegment => {
                "An optional parameter must be at the end of the segment. In the segment '{}', optional parameter '{}' is followed by '{}'."
            }
            Self::OptionalPrecededByInvalidSegment => {
                "In the segment '{}', the optional parameter '{}' is preceded by an invalid segment '{}'. Only a period (.) can precede an optional parameter."
            }
            Self::RequiredAfterOptional => {
                "The segment '{}' cannot follow an optional parameter. Only optional or catch-all parameters can appear after an optional parameter."
            }

            Self::RouteParameterUnused => {
                "The route parameter '{}' is not bound to any handler parameter."
            }
            Self::ParameterConstraintMissing => {
                "The route parameter '{}' binds to a '{}' value but has no ':{}' constraint."
            }
        }
    }
}

/// Source of localized message templates.
///
/// A catalog returning `None` for a kind falls back to the built-in English template.
pub trait MessageCatalog {
    fn template(&self, kind: DiagnosticKind) -> Option<&str>;
}

/// The built-in English catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl MessageCatalog for DefaultCatalog {
    fn template(&self, kind: DiagnosticKind) -> Option<&str> {
        Some(kind.template())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user, in route-text coordinates.
    pub(crate) range: TextRange,
    pub(crate) args: Vec<String>,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            args: Vec::new(),
            related: Vec::new(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }

    /// Message text in the default English catalog.
    pub fn message(&self) -> String {
        self.message_in(&DefaultCatalog)
    }

    pub fn message_in(&self, catalog: &dyn MessageCatalog) -> String {
        let template = catalog
            .template(self.kind)
            .unwrap_or_else(|| self.kind.template());
        fill_template(template, &self.args)
    }
}

/// Replaces each `{}` hole with the next argument. Missing arguments leave the hole empty.
fn fill_template(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut pieces = template.split("{}");
    if let Some(first) = pieces.next() {
        out.push_str(first);
    }
    for piece in pieces {
        if let Some(arg) = args.next() {
            out.push_str(arg);
        }
        out.push_str(piece);
    }
    out
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message()
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}
