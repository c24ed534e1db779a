//! Document elements and the contract facts extracted from them.

use serde::{Deserialize, Serialize};

/// Character offsets of a span within the converted HTML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub begin: i64,
    pub end: i64,
}

impl Location {
    #[must_use]
    pub const fn new(begin: i64, end: i64) -> Self {
        Self { begin, end }
    }
}

/// Basic information about an input document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub title: Option<String>,
    pub html: Option<String>,
    pub hash: Option<String>,
    pub label: Option<String>,
}

/// Same as [`Document`] without a label, as returned by table extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocInfo {
    pub html: Option<String>,
    pub title: Option<String>,
    pub hash: Option<String>,
}

/// A sentence or clause with its classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    pub location: Option<Location>,
    pub text: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub types: Vec<TypeLabel>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub attributes: Vec<Attribute>,
}

/// Nature and party of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub nature: String,
    pub party: String,
}

impl Label {
    #[must_use]
    pub fn new(nature: impl Into<String>, party: impl Into<String>) -> Self {
        Self {
            nature: nature.into(),
            party: party.into(),
        }
    }
}

/// Identified type of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeLabel {
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub provenance_ids: Vec<String>,
    /// Only present in feedback records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification: Option<String>,
}

impl TypeLabel {
    #[must_use]
    pub const fn new(label: Label) -> Self {
        Self {
            label: Some(label),
            provenance_ids: Vec::new(),
            modification: None,
        }
    }
}

/// Functional category of an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub provenance_ids: Vec<String>,
    /// Only present in feedback records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification: Option<String>,
}

impl Category {
    pub const LABEL_AMENDMENTS: &'static str = "Amendments";
    pub const LABEL_ASSET_USE: &'static str = "Asset Use";
    pub const LABEL_ASSIGNMENTS: &'static str = "Assignments";
    pub const LABEL_AUDITS: &'static str = "Audits";
    pub const LABEL_BUSINESS_CONTINUITY: &'static str = "Business Continuity";
    pub const LABEL_COMMUNICATION: &'static str = "Communication";
    pub const LABEL_CONFIDENTIALITY: &'static str = "Confidentiality";
    pub const LABEL_DELIVERABLES: &'static str = "Deliverables";
    pub const LABEL_DELIVERY: &'static str = "Delivery";
    pub const LABEL_DISPUTE_RESOLUTION: &'static str = "Dispute Resolution";
    pub const LABEL_FORCE_MAJEURE: &'static str = "Force Majeure";
    pub const LABEL_INDEMNIFICATION: &'static str = "Indemnification";
    pub const LABEL_INSURANCE: &'static str = "Insurance";
    pub const LABEL_INTELLECTUAL_PROPERTY: &'static str = "Intellectual Property";
    pub const LABEL_LIABILITY: &'static str = "Liability";
    pub const LABEL_ORDER_OF_PRECEDENCE: &'static str = "Order of Precedence";
    pub const LABEL_PAYMENT_TERMS_BILLING: &'static str = "Payment Terms & Billing";
    pub const LABEL_PRICING_TAXES: &'static str = "Pricing & Taxes";
    pub const LABEL_PRIVACY: &'static str = "Privacy";
    pub const LABEL_RESPONSIBILITIES: &'static str = "Responsibilities";
    pub const LABEL_SAFETY_AND_SECURITY: &'static str = "Safety and Security";
    pub const LABEL_SCOPE_OF_WORK: &'static str = "Scope of Work";
    pub const LABEL_SUBCONTRACTS: &'static str = "Subcontracts";
    pub const LABEL_TERM_TERMINATION: &'static str = "Term & Termination";
    pub const LABEL_WARRANTIES: &'static str = "Warranties";

    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }
}

/// An entity mentioned inside an element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub text: Option<String>,
    pub location: Option<Location>,
}

impl Attribute {
    pub const TYPE_CURRENCY: &'static str = "Currency";
    pub const TYPE_DATETIME: &'static str = "DateTime";
    pub const TYPE_DEFINED_TERM: &'static str = "DefinedTerm";
    pub const TYPE_DURATION: &'static str = "Duration";
    pub const TYPE_LOCATION: &'static str = "Location";
    pub const TYPE_NUMBER: &'static str = "Number";
    pub const TYPE_ORGANIZATION: &'static str = "Organization";
    pub const TYPE_PERCENTAGE: &'static str = "Percentage";
    pub const TYPE_PERSON: &'static str = "Person";
}

/// Confidence levels shared by the extracted contract facts.
pub mod confidence {
    pub const HIGH: &str = "High";
    pub const MEDIUM: &str = "Medium";
    pub const LOW: &str = "Low";
}

/// A dated fact such as an effective or termination date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFact {
    pub confidence_level: Option<String>,
    pub text: Option<String>,
    pub text_normalized: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub provenance_ids: Vec<String>,
    pub location: Option<Location>,
}

/// Effective dates of the contract.
pub type EffectiveDates = DateFact;
/// Termination dates of the contract.
pub type TerminationDates = DateFact;

/// Normalized reading of a monetary or time amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interpretation {
    pub value: Option<String>,
    pub numeric_value: Option<f64>,
    pub unit: Option<String>,
}

/// An amount-like fact: contract amounts, terms and payment terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountFact {
    pub confidence_level: Option<String>,
    pub text: Option<String>,
    pub text_normalized: Option<String>,
    pub interpretation: Option<Interpretation>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub provenance_ids: Vec<String>,
    pub location: Option<Location>,
}

pub type ContractAmts = AmountFact;
pub type ContractTerms = AmountFact;
pub type PaymentTerms = AmountFact;

/// The contract type, e.g. "Master Services Agreement".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractType {
    pub confidence_level: Option<String>,
    pub text: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub provenance_ids: Vec<String>,
    pub location: Option<Location>,
}

/// Currency named in the contract, normalized to ISO 4217.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractCurrencies {
    pub confidence_level: Option<String>,
    pub text: Option<String>,
    pub text_normalized: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub provenance_ids: Vec<String>,
    pub location: Option<Location>,
}

/// A party to the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parties {
    pub party: Option<String>,
    pub role: Option<String>,
    pub importance: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub addresses: Vec<TextSpan>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub contacts: Vec<Contact>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub mentions: Vec<TextSpan>,
}

impl Parties {
    pub const IMPORTANCE_PRIMARY: &'static str = "Primary";
    pub const IMPORTANCE_UNKNOWN: &'static str = "Unknown";
}

/// A piece of text and where it was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSpan {
    pub text: Option<String>,
    pub location: Option<Location>,
}

/// Contact person of a party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: Option<String>,
    pub role: Option<String>,
}

/// Section titles, leading sentences and paragraphs of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocStructure {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub section_titles: Vec<SectionTitles>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub leading_sentences: Vec<LeadingSentence>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionTitles {
    pub text: Option<String>,
    pub location: Option<Location>,
    pub level: Option<i64>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub element_locations: Vec<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadingSentence {
    pub text: Option<String>,
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub element_locations: Vec<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paragraph {
    pub location: Option<Location>,
}
