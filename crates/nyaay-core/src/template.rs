//! Template registry: the fixed layout of each document type.
//!
//! A template is an ordered list of segments. Literal text is emitted as-is;
//! field slots and list sections are filled in by the resolver.

use crate::document::DocumentType;
use crate::profile::ProfileField;

/// What a field slot reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef {
    Profile(ProfileField),
    /// The closing date line, in locale format.
    RenderDate,
}

/// List-valued analysis fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    /// One `- {citation}: {description}` line per statute.
    ApplicableStatutes,
    /// One plain line per action.
    RecommendedActions,
}

/// What a slot renders when the profile has no value for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Placeholder(&'static str),
    /// The render date as `YYYY-MM-DD`.
    Today,
}

/// A field reference inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub field: FieldRef,
    /// Tried after the profile value and before `fallback`.
    pub list: Option<ListField>,
    pub fallback: Fallback,
}

impl Slot {
    pub const fn text(field: ProfileField, placeholder: &'static str) -> Self {
        Self {
            field: FieldRef::Profile(field),
            list: None,
            fallback: Fallback::Placeholder(placeholder),
        }
    }

    pub const fn date(field: ProfileField) -> Self {
        Self {
            field: FieldRef::Profile(field),
            list: None,
            fallback: Fallback::Today,
        }
    }

    pub const fn render_date() -> Self {
        Self {
            field: FieldRef::RenderDate,
            list: None,
            fallback: Fallback::Today,
        }
    }

    pub const fn or_list(self, list: ListField) -> Self {
        Self {
            list: Some(list),
            ..self
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self.fallback {
            Fallback::Placeholder(p) => Some(p),
            Fallback::Today => None,
        }
    }
}

/// A headed block listing an analysis field. Elided entirely, heading and
/// trailing blank line included, when the list resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub list: ListField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Text(&'static str),
    Field(Slot),
    Section(Section),
}

#[derive(Debug)]
pub struct Template {
    pub document_type: DocumentType,
    segments: &'static [Segment],
}

impl Template {
    pub fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Every placeholder token the template's slots can emit, in order of
    /// first appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for segment in self.segments {
            if let Segment::Field(slot) = segment
                && let Some(p) = slot.placeholder()
                && !out.contains(&p)
            {
                out.push(p);
            }
        }
        out
    }

    /// Profile fields the template reads.
    pub fn profile_fields(&self) -> Vec<ProfileField> {
        let mut out = Vec::new();
        for segment in self.segments {
            if let Segment::Field(Slot {
                field: FieldRef::Profile(field),
                ..
            }) = segment
                && !out.contains(field)
            {
                out.push(*field);
            }
        }
        out
    }
}

/// Look up the template for a document type.
pub fn template_for(document_type: DocumentType) -> &'static Template {
    match document_type {
        DocumentType::Fir => &FIR,
        DocumentType::Rti => &RTI,
        DocumentType::LegalNotice => &LEGAL_NOTICE,
        DocumentType::ConsumerComplaint => &CONSUMER_COMPLAINT,
    }
}

// ── Shared slots ──

const NAME: Slot = Slot::text(ProfileField::FullName, "[Your Name]");
const FATHER: Slot = Slot::text(ProfileField::FatherOrGuardianName, "[Father's Name]");
const ADDRESS: Slot = Slot::text(ProfileField::Address, "[Your Address]");
const PHONE: Slot = Slot::text(ProfileField::Phone, "[Phone Number]");
const EMAIL: Slot = Slot::text(ProfileField::Email, "[Email Address]");
const LOCATION: Slot = Slot::text(ProfileField::IncidentLocation, "[Location of Incident]");
const POLICE_STATION: Slot = Slot::text(ProfileField::PoliceStation, "[Police Station Name]");
const INCIDENT_DATE: Slot = Slot::date(ProfileField::IncidentDate);
const DATED: Slot = Slot::render_date();

use Segment::{Field, Text};

// ── FIR ──

static FIR: Template = Template {
    document_type: DocumentType::Fir,
    segments: &[
        Text("To,\nThe Officer In-Charge,\n"),
        Field(POLICE_STATION),
        Text("\n\nSubject: First Information Report\n\nSir/Madam,\n\nI, "),
        Field(NAME),
        Text(", son/daughter of "),
        Field(FATHER),
        Text(", resident of "),
        Field(ADDRESS),
        Text(", would like to lodge a complaint regarding the following incident:\n\nDate of Incident: "),
        Field(INCIDENT_DATE),
        Text("\nLocation: "),
        Field(LOCATION),
        Text("\n\nDetails of the Complaint:\n"),
        Field(
            Slot::text(ProfileField::Description, "[Describe the incident in detail]")
                .or_list(ListField::RecommendedActions),
        ),
        Text("\n\n"),
        Segment::Section(Section {
            heading: "Applicable Laws:",
            list: ListField::ApplicableStatutes,
        }),
        Text("I request you to register an FIR and take necessary action as per law.\n\nYours sincerely,\n"),
        Field(NAME),
        Text("\nContact: "),
        Field(PHONE),
        Text("\nEmail: "),
        Field(EMAIL),
        Text("\nDate: "),
        Field(DATED),
        Text("\n"),
    ],
};

// ── RTI ──

static RTI: Template = Template {
    document_type: DocumentType::Rti,
    segments: &[
        Text(
            "To,\nThe Public Information Officer,\n[Department Name]\n[Address]\n\n\
             Subject: Application under Right to Information Act, 2005\n\n\
             Sir/Madam,\n\n\
             Under the Right to Information Act, 2005, I ",
        ),
        Field(NAME),
        Text(", request the following information:\n\n1. "),
        Field(Slot::text(
            ProfileField::Description,
            "[Specify the information you need]",
        )),
        Text(
            "\n\n2. Please provide certified copies of relevant documents.\n\n\
             3. If the information sought is held by another public authority, kindly transfer \
             this application under Section 6(3) of the RTI Act.\n\n\
             I am enclosing the application fee of Rs. 10/- by way of [payment method].\n\n\
             Contact Details:\nName: ",
        ),
        Field(NAME),
        Text("\nAddress: "),
        Field(ADDRESS),
        Text("\nPhone: "),
        Field(PHONE),
        Text("\nEmail: "),
        Field(EMAIL),
        Text("\n\nDate: "),
        Field(DATED),
        Text("\n\nYours sincerely,\n"),
        Field(NAME),
        Text("\n"),
    ],
};

// ── Legal notice ──

static LEGAL_NOTICE: Template = Template {
    document_type: DocumentType::LegalNotice,
    segments: &[
        Text("LEGAL NOTICE\n\nTO:\n[Recipient Name]\n[Recipient Address]\n\nFROM:\n"),
        Field(NAME),
        Text("\n"),
        Field(ADDRESS),
        Text(
            "\n\nSUBJECT: Legal Notice under [Applicable Law]\n\n\
             Sir/Madam,\n\n\
             TAKE NOTICE that you are hereby called upon to ",
        ),
        Field(Slot::text(
            ProfileField::Description,
            "[specify the demand/action required]",
        )),
        Text(
            " within 15 days from the receipt of this notice, failing which my client will be \
             constrained to initiate appropriate legal proceedings against you for the recovery of \
             the said amount along with interest and costs.\n\n",
        ),
        Segment::Section(Section {
            heading: "Legal Provisions:",
            list: ListField::ApplicableStatutes,
        }),
        Text(
            "TAKE FURTHER NOTICE that if you fail to comply with the above, my client will be \
             compelled to file a suit for specific performance and/or damages which will be at \
             your risk as to costs.\n\nDated: ",
        ),
        Field(DATED),
        Text("\n\n"),
        Field(NAME),
        Text("\nContact: "),
        Field(PHONE),
        Text("\n"),
    ],
};

// ── Consumer complaint ──

static CONSUMER_COMPLAINT: Template = Template {
    document_type: DocumentType::ConsumerComplaint,
    segments: &[
        Text(
            "CONSUMER COMPLAINT\n\n\
             Before the District Consumer Disputes Redressal Forum\n[District Name]\n\n\
             BETWEEN:\n\n",
        ),
        Field(NAME),
        Text("\nSon/Daughter of "),
        Field(FATHER),
        Text("\nResident of "),
        Field(ADDRESS),
        Text("\nContact: "),
        Field(PHONE),
        Text("\nEmail: "),
        Field(EMAIL),
        Text(
            "\n\n... COMPLAINANT\n\n\
             VERSUS\n\n\
             [Name of opposite party]\n[Address of opposite party]\n\n\
             ... OPPOSITE PARTY\n\n\
             COMPLAINT UNDER SECTION 35 OF THE CONSUMER PROTECTION ACT, 2019\n\n\
             FACTS OF THE CASE:\n\n\
             1. That the complainant purchased goods/services from the opposite party on ",
        ),
        Field(INCIDENT_DATE),
        Text(".\n\n2. "),
        Field(Slot::text(
            ProfileField::Description,
            "[Describe the deficiency in service or defect in goods]",
        )),
        Text(
            "\n\n3. That the act of the opposite party amounts to deficiency in service/defective \
             goods under the Consumer Protection Act, 2019.\n\n\
             RELIEFS SOUGHT:\n\n\
             a) Direct the opposite party to replace/repair the defective goods/service\n\
             b) Refund the amount paid\n\
             c) Compensation for mental agony and harassment\n\
             d) Cost of litigation\n\n\
             Date: ",
        ),
        Field(DATED),
        Text("\n\n"),
        Field(NAME),
        Text("\n(Complainant)\n"),
    ],
};
