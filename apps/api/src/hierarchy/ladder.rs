//! Escalation Planner — "one step up" on the organizational or technical ladder.

use serde::Serialize;

use crate::hierarchy::classifier::{classify_category, detect_seniority, Category};

/// A canonical target label such as `GERENTE/MANAGER`.
///
/// Alternatives are separated by `/`; every piece is already normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalLabel(&'static str);

impl CanonicalLabel {
    pub const GENERIC_MANAGER: CanonicalLabel = CanonicalLabel("GERENTE/MANAGER");
    pub const DIRECTOR: CanonicalLabel = CanonicalLabel("DIRECTOR");

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// The `/`-separated alternatives of the label.
    pub fn pieces(&self) -> impl Iterator<Item = &'static str> {
        self.0.split('/').map(str::trim).filter(|p| !p.is_empty())
    }
}

impl std::fmt::Display for CanonicalLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Organizational ladder
// ────────────────────────────────────────────────────────────────────────────

/// Rungs of the organizational ladder, most senior first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgRung {
    Chief,
    VicePresident,
    Director,
    Head,
    Manager,
    SubManager,
    JefeLead,
    TeamLead,
    Coordinator,
    Supervisor,
    Specialist,
    Analyst,
    Assistant,
    Intern,
}

const ORG_LADDER: [OrgRung; 14] = [
    OrgRung::Chief,
    OrgRung::VicePresident,
    OrgRung::Director,
    OrgRung::Head,
    OrgRung::Manager,
    OrgRung::SubManager,
    OrgRung::JefeLead,
    OrgRung::TeamLead,
    OrgRung::Coordinator,
    OrgRung::Supervisor,
    OrgRung::Specialist,
    OrgRung::Analyst,
    OrgRung::Assistant,
    OrgRung::Intern,
];

impl OrgRung {
    pub fn label(self) -> CanonicalLabel {
        CanonicalLabel(match self {
            Self::Chief => "CEO/CHIEF/CTO/COO/PRESIDENTE",
            Self::VicePresident => "VP/SVP/DIRECCION",
            Self::Director => "DIRECTOR",
            Self::Head => "HEAD",
            Self::Manager => "GERENTE/MANAGER",
            Self::SubManager => "SUBDIRECTOR/SUBGERENTE",
            Self::JefeLead => "JEFE/LEAD",
            Self::TeamLead => "LIDER/TEAM LEAD",
            Self::Coordinator => "COORDINADOR",
            Self::Supervisor => "SUPERVISOR",
            Self::Specialist => "EJECUTIVO/SPECIALIST",
            Self::Analyst => "ANALISTA",
            Self::Assistant => "ASISTENTE",
            Self::Intern => "PRACTICANTE/INTERN",
        })
    }

    /// The rung directly above, or `None` at the top.
    pub fn next_higher(self) -> Option<OrgRung> {
        let idx = ORG_LADDER.iter().position(|r| *r == self)?;
        idx.checked_sub(1).map(|i| ORG_LADDER[i])
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Technical ladder
// ────────────────────────────────────────────────────────────────────────────

/// Stages of the technical career ladder, most junior first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TechStage {
    Intern,
    Junior,
    Mid,
    Senior,
    Lead,
    EngineeringManager,
    DirectorEngineering,
    VpEngineering,
    CtoChief,
}

const TECH_LADDER: [TechStage; 9] = [
    TechStage::Intern,
    TechStage::Junior,
    TechStage::Mid,
    TechStage::Senior,
    TechStage::Lead,
    TechStage::EngineeringManager,
    TechStage::DirectorEngineering,
    TechStage::VpEngineering,
    TechStage::CtoChief,
];

impl TechStage {
    pub fn label(self) -> CanonicalLabel {
        CanonicalLabel(match self {
            Self::Intern => "PRACTICANTE/INTERN",
            Self::Junior => "JUNIOR",
            Self::Mid => "MID/REGULAR",
            Self::Senior => "SENIOR",
            Self::Lead => "LEAD/TECH LEAD",
            Self::EngineeringManager => "ENGINEERING MANAGER",
            Self::DirectorEngineering => "DIRECTOR ENGINEERING",
            Self::VpEngineering => "VP ENGINEERING",
            Self::CtoChief => "CTO/CHIEF",
        })
    }

    /// The stage directly above, or `None` at the top.
    pub fn next(self) -> Option<TechStage> {
        let idx = TECH_LADDER.iter().position(|s| *s == self)?;
        TECH_LADDER.get(idx + 1).copied()
    }

    /// Nearest organizational label for a stage detected outside a technical role.
    fn org_equivalent(self) -> CanonicalLabel {
        match self {
            Self::DirectorEngineering | Self::VpEngineering | Self::CtoChief => {
                CanonicalLabel::DIRECTOR
            }
            _ => CanonicalLabel::GENERIC_MANAGER,
        }
    }
}

/// Target label one step above a normalized title, if one can be derived.
pub fn next_higher_label(title: &str) -> Option<CanonicalLabel> {
    let category = classify_category(title);

    if category == Some(Category::TechRole) {
        // Technical roles without a seniority token sit at mid level.
        let stage = detect_seniority(title).unwrap_or(TechStage::Mid);
        return Some(
            stage
                .next()
                .map(TechStage::label)
                .unwrap_or(CanonicalLabel::GENERIC_MANAGER),
        );
    }

    if let Some(rung) = category.and_then(Category::org_rung) {
        return rung.next_higher().map(OrgRung::label);
    }

    detect_seniority(title).map(TechStage::org_equivalent)
}
