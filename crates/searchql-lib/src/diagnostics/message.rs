use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics have overlapping spans, the higher-priority one
/// suppresses the lower-priority one. This prevents cascading error noise.
///
/// Priority rationale:
/// - Unclosed groups and phrases swallow the rest of the query
/// - Missing operands are root causes the user should fix first
/// - Misplaced tokens are specific mistakes at a location
/// - Character-level validation assumes the structure is sound
/// - Style warnings come last
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // These cause cascading errors throughout the rest of the query
    UnclosedGroup,
    UnclosedPhrase,

    // User omitted something required - root cause errors
    ExpectedExpression,
    ExpectedFieldValue,
    ExpectedFieldName,

    // User wrote something that doesn't belong
    EmptyGroup,
    EmptyPhrase,
    DanglingOr,
    DoubleNegation,
    UnmatchedParen,
    InvalidPhraseContent,
    UnexpectedToken,

    // Character-level validation
    InvalidFieldName,
    UnderscoreInTerm,

    // Accepted, but probably not what the user meant
    UppercaseOperator,
}

impl DiagnosticKind {
    /// Default severity for this kind.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UppercaseOperator => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether this kind suppresses `other` when spans overlap.
    ///
    /// Uses enum discriminant ordering: lower position = higher priority.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Structural errors are Unclosed* - they cause cascading errors but
    /// should be suppressed by root-cause errors at the same position.
    pub fn is_structural_error(&self) -> bool {
        matches!(self, Self::UnclosedGroup | Self::UnclosedPhrase)
    }

    /// Root cause errors - user omitted something required.
    /// These suppress structural errors at the same position.
    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedExpression | Self::ExpectedFieldValue | Self::ExpectedFieldName
        )
    }

    /// Default hint for this kind, automatically attached to diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::ExpectedFieldValue => Some("e.g., `title:django`"),
            Self::ExpectedFieldName => Some("e.g., `author:jacob`"),
            Self::EmptyGroup => Some("put search terms inside the parentheses"),
            Self::EmptyPhrase => Some("put search terms inside the quotes"),
            Self::DanglingOr => Some("`or` joins two clauses: `video or pictures`"),
            Self::DoubleNegation => Some("a clause can only be negated once"),
            Self::InvalidFieldName => Some("field names use letters, digits and `_`"),
            Self::UnderscoreInTerm => Some("`_` is only allowed in field names"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `)`",
            Self::UnclosedPhrase => "missing closing quote",

            Self::ExpectedExpression => "expected a search term",
            Self::ExpectedFieldValue => "expected a field value",
            Self::ExpectedFieldName => "expected a field name before `:`",

            Self::EmptyGroup => "empty `()` is not allowed",
            Self::EmptyPhrase => "empty phrase is not allowed",
            Self::DanglingOr => "`or` is missing an operand",
            Self::DoubleNegation => "double negation is not allowed",
            Self::UnmatchedParen => "unmatched `)`",
            Self::InvalidPhraseContent => "not allowed inside a phrase",
            Self::UnexpectedToken => "unexpected token",

            Self::InvalidFieldName => "invalid field name",
            Self::UnderscoreInTerm => "search terms cannot contain `_`",

            Self::UppercaseOperator => "uppercase operator is searched as a plain term",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedGroup | Self::UnclosedPhrase => {
                format!("{}; {{}}", self.fallback_message())
            }
            Self::InvalidFieldName => "`{}` is not a valid field name".to_string(),
            Self::UnderscoreInTerm => "`{}` contains `_`".to_string(),
            Self::UppercaseOperator => "`{}` is searched as a plain term".to_string(),
            Self::InvalidPhraseContent => "{} is not allowed inside a phrase".to_string(),

            // Standard pattern: fallback + context
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
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
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
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
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    /// The range used for suppression logic. Errors within another error's
    /// suppression_range may be suppressed. Defaults to `range` but can be
    /// set to the enclosing group or phrase.
    pub(crate) suppression_range: TextRange,
    pub(crate) message: String,
    pub(crate) fix: Option<Fix>,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            suppression_range: range,
            message: message.into(),
            fix: None,
            related: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
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
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
