//! Title Classifier — category, seniority rank, and technical stage of a title.
//!
//! Three ordered tables drive classification:
//! - `CATEGORY_RULES`: first matching pattern wins, most specific first.
//! - `RANK_KEYWORDS`: every keyword present is a candidate; the lowest rank wins.
//! - `SENIORITY_RULES`: first matching token wins.
//!
//! All inputs are expected to be normalized (see `hierarchy::normalize`).

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::hierarchy::ladder::{OrgRung, TechStage};
use crate::hierarchy::normalize::contains_keyword;

/// Rank assigned when no seniority keyword is present.
pub const UNKNOWN_RANK: u16 = 999;

/// Canonical organizational role bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Chief,
    VicePresident,
    Director,
    Head,
    GerenteCentral,
    GerenteDeArea,
    GerenteZonal,
    GerenteDeDivision,
    GerenteAsistente,
    Manager,
    Subgerente,
    JefeZonal,
    JefeComercial,
    JefeLead,
    TeamManager,
    TeamLead,
    Lider,
    Coordinator,
    Supervisor,
    PrincipalExpert,
    PrincipalLead,
    Principal,
    Expert,
    Strategist,
    Advisor,
    AgileCoach,
    ScrumMaster,
    AgileTeamFacilitator,
    Architect,
    TechRole,
    DataScientistSenior,
    DataScientist,
    DataEngineer,
    DataAnalystSenior,
    DataAnalyst,
    DesignLead,
    Designer,
    ProductLead,
    Product,
    ConversationDesigner,
    GrowthLead,
    Growth,
    BusinessDesigner,
    BusinessAnalyst,
    Business,
    InnovationLead,
    Innovation,
    Specialist,
    RelationshipManager,
    Executive,
    AnalystSenior,
    Analyst,
    Gestor,
    Asesor,
    Campaign,
    Associate,
    Assistant,
    Representative,
    Technician,
    Auxiliary,
    Trainee,
    Intern,
    Junior,
    Cx,
    RealTimeOperation,
}

impl Category {
    /// Canonical label, in normalized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Chief => "CEO/CHIEF/CTO/COO/PRESIDENTE",
            Self::VicePresident => "VP/SVP/DIRECCION",
            Self::Director => "DIRECTOR",
            Self::Head => "HEAD",
            Self::GerenteCentral => "GERENTE CENTRAL",
            Self::GerenteDeArea => "GERENTE DE AREA",
            Self::GerenteZonal => "GERENTE ZONAL",
            Self::GerenteDeDivision => "GERENTE DE DIVISION",
            Self::GerenteAsistente => "GERENTE ASISTENTE",
            Self::Manager => "GERENTE/MANAGER",
            Self::Subgerente => "SUBDIRECTOR/SUBGERENTE",
            Self::JefeZonal => "JEFE ZONAL",
            Self::JefeComercial => "JEFE COMERCIAL",
            Self::JefeLead => "JEFE/LEAD",
            Self::TeamManager => "TEAM MANAGER",
            Self::TeamLead => "TEAM LEAD",
            Self::Lider => "LIDER/TEAM LEAD",
            Self::Coordinator => "COORDINADOR",
            Self::Supervisor => "SUPERVISOR",
            Self::PrincipalExpert => "PRINCIPAL EXPERT",
            Self::PrincipalLead => "PRINCIPAL LEAD",
            Self::Principal => "PRINCIPAL",
            Self::Expert => "EXPERT",
            Self::Strategist => "STRATEGIST",
            Self::Advisor => "ADVISOR",
            Self::AgileCoach => "AGILE COACH",
            Self::ScrumMaster => "SCRUM MASTER",
            Self::AgileTeamFacilitator => "AGILE TEAM FACILITATOR",
            Self::Architect => "ARCHITECT",
            Self::TechRole => "TECH_ROLE",
            Self::DataScientistSenior => "DATA SCIENTIST SENIOR",
            Self::DataScientist => "DATA SCIENTIST",
            Self::DataEngineer => "DATA ENGINEER",
            Self::DataAnalystSenior => "DATA ANALYST SENIOR",
            Self::DataAnalyst => "DATA ANALYST",
            Self::DesignLead => "DESIGN LEAD",
            Self::Designer => "DESIGNER",
            Self::ProductLead => "PRODUCT LEAD",
            Self::Product => "PRODUCT",
            Self::ConversationDesigner => "CONVERSATION DESIGNER",
            Self::GrowthLead => "GROWTH LEAD",
            Self::Growth => "GROWTH",
            Self::BusinessDesigner => "BUSINESS DESIGNER",
            Self::BusinessAnalyst => "BUSINESS ANALYST",
            Self::Business => "BUSINESS",
            Self::InnovationLead => "INNOVATION LEAD",
            Self::Innovation => "INNOVATION",
            Self::Specialist => "SPECIALIST",
            Self::RelationshipManager => "RELATIONSHIP MANAGER",
            Self::Executive => "EJECUTIVO/SPECIALIST",
            Self::AnalystSenior => "ANALISTA SENIOR",
            Self::Analyst => "ANALISTA",
            Self::Gestor => "GESTOR",
            Self::Asesor => "ASESOR",
            Self::Campaign => "CAMPAIGN",
            Self::Associate => "ASSOCIATE",
            Self::Assistant => "ASISTENTE",
            Self::Representative => "REPRESENTANTE",
            Self::Technician => "TECNICO",
            Self::Auxiliary => "AUXILIAR",
            Self::Trainee => "TRAINEE",
            Self::Intern => "PRACTICANTE/INTERN",
            Self::Junior => "JUNIOR",
            Self::Cx => "CX",
            Self::RealTimeOperation => "REAL TIME OPERATION",
        }
    }

    /// Rung on the organizational ladder, or `None` for off-ladder categories.
    pub fn org_rung(self) -> Option<OrgRung> {
        match self {
            Self::Chief => Some(OrgRung::Chief),
            Self::VicePresident => Some(OrgRung::VicePresident),
            Self::Director => Some(OrgRung::Director),
            Self::Head => Some(OrgRung::Head),
            Self::GerenteCentral
            | Self::GerenteDeArea
            | Self::GerenteZonal
            | Self::GerenteDeDivision
            | Self::GerenteAsistente
            | Self::Manager => Some(OrgRung::Manager),
            Self::Subgerente => Some(OrgRung::SubManager),
            Self::JefeZonal | Self::JefeComercial | Self::JefeLead => Some(OrgRung::JefeLead),
            Self::TeamLead | Self::Lider => Some(OrgRung::TeamLead),
            Self::Coordinator => Some(OrgRung::Coordinator),
            Self::Supervisor => Some(OrgRung::Supervisor),
            Self::Specialist | Self::Executive => Some(OrgRung::Specialist),
            Self::AnalystSenior | Self::Analyst => Some(OrgRung::Analyst),
            Self::Assistant => Some(OrgRung::Assistant),
            Self::Intern => Some(OrgRung::Intern),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Category rules (first match wins)
// ────────────────────────────────────────────────────────────────────────────

const CATEGORY_RULES: &[(&str, Category)] = &[
    // C-level. Compound titles that embed CHIEF/PRESIDENTE go first.
    (r"\bVICE PRESIDENTE\b|\bVICE PRESIDENT\b|\bVP\b|\bSVP\b", Category::VicePresident),
    (r"\bCHIEF OF\b", Category::JefeLead),
    (r"\bCEO\b|\bCHIEF\b|\bCTO\b|\bCOO\b|\bPRESIDENTE\b", Category::Chief),
    (r"\bDIRECTOR\b", Category::Director),
    (r"\bHEAD OFFICE\b|\bHEAD DE\b|\bHEAD\b", Category::Head),
    // Gerencia
    (r"\bGERENTE CENTRAL\b", Category::GerenteCentral),
    (r"\bGERENTE DE AREA\b", Category::GerenteDeArea),
    (r"\bGERENTE ZONAL\b", Category::GerenteZonal),
    (r"\bGERENTE DE DIVISION\b", Category::GerenteDeDivision),
    (r"\bGERENTE TIENDA\b|\bGERENTE ASISTENTE\b", Category::GerenteAsistente),
    (r"\bGERENTE\b|\bMANAGER\b", Category::Manager),
    (r"\bSUBDIRECTOR\b|\bSUBGERENTE\b|\bSUB-GERENTE\b", Category::Subgerente),
    // Jefatura
    (r"\bJEFE ZONAL\b", Category::JefeZonal),
    (r"\bJEFE COMERCIAL\b", Category::JefeComercial),
    (r"\bJEFE\b", Category::JefeLead),
    (r"\bTEAM MANAGER\b", Category::TeamManager),
    // Liderazgo
    (r"\bLEAD DE\b|\bTEAM LEAD\b|\bTECH LEAD\b", Category::TeamLead),
    (r"\bLIDER DE\b|\bLIDER\b", Category::Lider),
    (r"\bCOORDINADOR\b", Category::Coordinator),
    (r"\bSUPERVISOR\b", Category::Supervisor),
    // Senior individual contributors
    (r"\bPRINCIPAL EXPERT\b", Category::PrincipalExpert),
    (r"\bPRINCIPAL LEAD\b|\bPRINCIPAL ENGINEER\b", Category::PrincipalLead),
    (r"\bPRINCIPAL\b", Category::Principal),
    (r"\bEXPERT\b", Category::Expert),
    (r"\bSTRATEGIST\b", Category::Strategist),
    (r"\bADVISOR\b", Category::Advisor),
    // Agile
    (r"\bAGILE COACH\b", Category::AgileCoach),
    (r"\bSCRUM MASTER\b", Category::ScrumMaster),
    (r"\bAGILE TEAM FACILITATOR\b", Category::AgileTeamFacilitator),
    // Architecture and engineering
    (r"\bBUSINESS ARCHITECT\b|\bTECHNOLOGY ARCHITECT\b|\bARCHITECT\b", Category::Architect),
    (r"\bSOFTWARE TEST ENGINEER\b|\bSOFTWARE ENGINEER\b|\bENGINEER\b", Category::TechRole),
    (r"\bDESARROLLADOR\b|\bDEVELOPER\b", Category::TechRole),
    // Data
    (r"\bDATA SCIENTIST ADVISOR\b|\bDATA SCIENTIST EXPERT\b", Category::DataScientistSenior),
    (r"\bDATA SCIENTIST\b", Category::DataScientist),
    (r"\bDATA ENGINEER\b", Category::DataEngineer),
    (r"\bDATA ANALYST ADVISOR\b", Category::DataAnalystSenior),
    (r"\bDATA ANALYST\b", Category::DataAnalyst),
    // Product and design
    (r"\bPRODUCT DESIGNER\b|\bDESIGN LEAD\b", Category::DesignLead),
    (r"\bDESIGNER\b|\bDESIGN\b", Category::Designer),
    (r"\bPRODUCT LEAD\b", Category::ProductLead),
    (r"\bPRODUCT\b", Category::Product),
    (r"\bCONVERSATION DESIGNER\b|\bCONVERSATION DESIGN\b", Category::ConversationDesigner),
    // Growth and business
    (r"\bGROWTH HACKER\b|\bGROWTH LEAD\b", Category::GrowthLead),
    (r"\bGROWTH\b", Category::Growth),
    (r"\bBUSINESS DESIGNER\b", Category::BusinessDesigner),
    (r"\bBUSINESS ANALYST\b", Category::BusinessAnalyst),
    (r"\bBUSINESS\b", Category::Business),
    (r"\bINNOVATION PRINCIPAL LEAD\b", Category::InnovationLead),
    (r"\bINNOVATION\b", Category::Innovation),
    (r"\bSPECIALIST\b|\bESPECIALISTA\b", Category::Specialist),
    // Executives and analysts
    (r"\bRELATIONSHIP MANAGER\b", Category::RelationshipManager),
    (r"\bEJECUTIVO\b|\bEXECUTIVE\b", Category::Executive),
    (r"\bANALISTA SR\b|\bANALISTA SENIOR\b", Category::AnalystSenior),
    (r"\bANALISTA\b|\bANALYST\b", Category::Analyst),
    // Support
    (r"\bGESTOR\b", Category::Gestor),
    (r"\bASESOR\b", Category::Asesor),
    (r"\bCAMPAIGN\b", Category::Campaign),
    (r"\bASSOCIATE\b", Category::Associate),
    (r"\bASISTENTE\b|\bASSISTANT\b", Category::Assistant),
    (r"\bREPRESENTANTE\b", Category::Representative),
    (r"\bTECNICO\b", Category::Technician),
    (r"\bAUXILIAR\b", Category::Auxiliary),
    // Entry level
    (r"\bTRAINEE\b", Category::Trainee),
    (r"\bPRACTICANTE\b|\bPRACTICAS\b|\bINTERN\b", Category::Intern),
    (r"\bJUNIOR\b|\bJR\b", Category::Junior),
    (r"\bCX\b", Category::Cx),
    (r"\bREAL TIME OPERATION\b", Category::RealTimeOperation),
];

static CATEGORY_PATTERNS: LazyLock<Vec<(Regex, Category)>> = LazyLock::new(|| {
    CATEGORY_RULES
        .iter()
        .map(|(pattern, category)| {
            let re = Regex::new(pattern).expect("category pattern should compile");
            (re, *category)
        })
        .collect()
});

/// Category of a normalized title. The first matching rule wins.
pub fn classify_category(title: &str) -> Option<Category> {
    CATEGORY_PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(title))
        .map(|(_, category)| *category)
}

// ────────────────────────────────────────────────────────────────────────────
// Rank keywords (best match wins)
// ────────────────────────────────────────────────────────────────────────────

/// Seniority keywords, 0 = most senior. Order does not affect the result.
const RANK_KEYWORDS: &[(&str, u16)] = &[
    // C-level
    ("CEO", 0),
    ("CHIEF", 0),
    ("PRESIDENTE", 0),
    ("VICE PRESIDENTE EJECUTIVO", 1),
    ("VP", 1),
    ("SVP", 1),
    ("GERENTE CENTRAL", 2),
    // Dirección
    ("DIRECTOR", 4),
    ("HEAD OFFICE", 4),
    ("HEAD DE", 5),
    ("HEAD DATA", 5),
    ("HEAD", 5),
    // Gerencia
    ("GERENTE DE AREA", 7),
    ("GERENTE ZONAL", 8),
    ("GERENTE DE DIVISION", 9),
    ("GERENTE TIENDA", 10),
    ("GERENTE ASISTENTE", 11),
    ("GERENTE", 10),
    ("SUBDIRECTOR", 13),
    ("SUBGERENTE", 14),
    ("SUB-GERENTE", 14),
    // Jefatura
    ("JEFE ZONAL", 16),
    ("JEFE COMERCIAL", 17),
    ("JEFE DE", 17),
    ("JEFE", 18),
    ("TEAM MANAGER", 19),
    ("MANAGER", 19),
    ("LEAD DE", 20),
    ("TEAM LEAD", 21),
    ("TECH LEAD", 21),
    ("LIDER DE", 21),
    ("LIDER", 22),
    ("COORDINADOR", 23),
    ("SUPERVISOR", 26),
    // Senior individual contributors
    ("PRINCIPAL EXPERT", 29),
    ("PRINCIPAL LEAD", 30),
    ("PRINCIPAL ENGINEER", 30),
    ("PRINCIPAL", 31),
    ("EXPERT", 32),
    ("STRATEGIST", 33),
    ("ADVISOR", 34),
    ("LEAD", 35),
    ("SENIOR", 36),
    ("SR", 36),
    ("SPECIALIST", 37),
    ("ESPECIALISTA DE", 37),
    ("ESPECIALISTA", 38),
    ("AGILE COACH", 39),
    ("SCRUM MASTER", 40),
    ("BUSINESS ARCHITECT", 41),
    ("TECHNOLOGY ARCHITECT", 41),
    ("ARCHITECT", 42),
    ("ENGINEER", 43),
    ("SOFTWARE TEST ENGINEER", 43),
    ("SOFTWARE ENGINEER", 43),
    ("DEVELOPER", 43),
    ("DESARROLLADOR", 43),
    ("DATA SCIENTIST", 44),
    ("PRODUCT DESIGNER", 45),
    ("DESIGNER", 46),
    ("INNOVATION", 47),
    // Mid level
    ("AGILE TEAM FACILITATOR", 51),
    ("EJECUTIVO DE", 52),
    ("EJECUTIVO", 53),
    ("EXECUTIVE", 53),
    ("RELATIONSHIP MANAGER", 54),
    ("GROWTH HACKER", 55),
    ("GROWTH LEAD", 56),
    ("GROWTH", 57),
    ("BUSINESS DESIGNER", 58),
    ("BUSINESS ANALYST", 59),
    ("BUSINESS", 60),
    ("DATA ENGINEER", 61),
    ("DATA ANALYST", 62),
    ("PRODUCT LEAD", 63),
    ("PRODUCT", 64),
    ("CONVERSATION DESIGNER", 65),
    ("CONVERSATION DESIGN", 65),
    ("DESIGN", 66),
    ("ANALISTA DE", 67),
    ("ANALISTA", 68),
    ("ANALYST", 68),
    ("GESTOR", 69),
    ("ASESOR", 70),
    // Support
    ("CAMPAIGN", 71),
    ("ASSOCIATE", 72),
    ("ASISTENTE DE", 73),
    ("ASISTENTE", 74),
    ("ASSISTANT", 74),
    ("REPRESENTANTE", 75),
    ("TECNICO", 76),
    ("AUXILIAR", 77),
    ("TRAMITADOR", 78),
    // Entry level
    ("TRAINEE", 81),
    ("PRACTICANTE", 82),
    ("INTERN", 82),
    ("JUNIOR", 83),
    ("JR", 83),
    ("CX", 90),
    ("REAL TIME OPERATION", 90),
];

/// Seniority rank of a normalized title: the lowest rank among all keywords
/// it contains, or [`UNKNOWN_RANK`].
pub fn infer_rank(title: &str) -> u16 {
    RANK_KEYWORDS
        .iter()
        .filter(|(keyword, _)| contains_keyword(title, keyword))
        .map(|(_, rank)| *rank)
        .min()
        .unwrap_or(UNKNOWN_RANK)
}

// ────────────────────────────────────────────────────────────────────────────
// Technical seniority tokens (first match wins)
// ────────────────────────────────────────────────────────────────────────────

const SENIORITY_RULES: &[(&str, TechStage)] = &[
    (r"\bPRACTICANTE\b|\bINTERN\b", TechStage::Intern),
    (r"\bJUNIOR\b|\bJR\b", TechStage::Junior),
    (r"\bMID\b|\bINTERMEDIATE\b", TechStage::Mid),
    (r"\bSENIOR\b|\bSR\b", TechStage::Senior),
    (r"\bLEAD\b|\bTECH LEAD\b|\bTEAM LEAD\b", TechStage::Lead),
    (r"\bPRINCIPAL\b", TechStage::Lead),
    (r"\bMANAGER\b|\bGERENTE\b", TechStage::EngineeringManager),
    (r"\bDIRECTOR\b", TechStage::DirectorEngineering),
    (r"\bVP\b|\bVICE PRESIDENT\b", TechStage::VpEngineering),
    (r"\bCTO\b|\bCHIEF\b", TechStage::CtoChief),
];

static SENIORITY_PATTERNS: LazyLock<Vec<(Regex, TechStage)>> = LazyLock::new(|| {
    SENIORITY_RULES
        .iter()
        .map(|(pattern, stage)| {
            let re = Regex::new(pattern).expect("seniority pattern should compile");
            (re, *stage)
        })
        .collect()
});

/// Technical-ladder stage signalled by a seniority token in the title.
pub fn detect_seniority(title: &str) -> Option<TechStage> {
    SENIORITY_PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(title))
        .map(|(_, stage)| *stage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_gerente_rule_beats_generic() {
        assert_eq!(classify_category("GERENTE DE AREA COMERCIAL"), Some(Category::GerenteDeArea));
        assert_eq!(classify_category("GERENTE DE PRODUCTO"), Some(Category::Manager));
        assert_eq!(classify_category("GERENTE ASISTENTE"), Some(Category::GerenteAsistente));
    }

    #[test]
    fn test_category_is_first_match_not_best() {
        // DIRECTOR is listed before GERENTE, so it wins even though both appear.
        assert_eq!(classify_category("GERENTE DIRECTOR"), Some(Category::Director));
        // ENGINEER catches DATA ENGINEER before the data rule is reached.
        assert_eq!(classify_category("DATA ENGINEER"), Some(Category::TechRole));
    }

    #[test]
    fn test_category_word_boundaries() {
        assert_eq!(classify_category("SUBGERENTE DE RIESGOS"), Some(Category::Subgerente));
        assert_eq!(classify_category("ANALYST"), Some(Category::Analyst));
        assert_eq!(classify_category("ASESOR COMERCIAL"), Some(Category::Asesor));
    }

    #[test]
    fn test_vice_president_not_swallowed_by_presidente() {
        assert_eq!(
            classify_category("VICE PRESIDENTE EJECUTIVO"),
            Some(Category::VicePresident)
        );
        assert_eq!(classify_category("CHIEF OF STAFF"), Some(Category::JefeLead));
    }

    #[test]
    fn test_unmatched_category_is_none() {
        assert_eq!(classify_category("XYZ CUSTOM ROLE"), None);
        assert_eq!(classify_category(""), None);
    }

    #[test]
    fn test_rank_is_best_match() {
        // GERENTE (10) is more senior than GERENTE ASISTENTE (11).
        assert_eq!(infer_rank("GERENTE ASISTENTE"), 10);
        // ANALISTA DE (67) beats ANALISTA (68); PRODUCTO starts with PRODUCT (64).
        assert_eq!(infer_rank("ANALISTA DE CREDITO"), 67);
        assert_eq!(infer_rank("ANALISTA DE PRODUCTO"), 64);
        assert_eq!(infer_rank("ANALISTA PRODUCT OWNER"), 64);
        assert_eq!(infer_rank("ANALISTA"), 68);
    }

    #[test]
    fn test_rank_feminine_and_plural_forms() {
        assert_eq!(infer_rank("COORDINADORA DE VENTAS"), 23);
        assert_eq!(infer_rank("SUPERVISORA DE CAJA"), 26);
        assert_eq!(infer_rank("ANALISTAS"), 68);
        assert_eq!(infer_rank("JEFES DE TURNO"), 18);
    }

    #[test]
    fn test_rank_ignores_keywords_inside_words() {
        assert_eq!(infer_rank("SUBGERENTE"), 14);
        assert_eq!(infer_rank("SUBDIRECTOR"), 13);
        assert_eq!(infer_rank("ASESOR"), 70);
    }

    #[test]
    fn test_rank_unknown_is_sentinel() {
        assert_eq!(infer_rank("XYZ CUSTOM ROLE"), UNKNOWN_RANK);
        assert_eq!(infer_rank(""), UNKNOWN_RANK);
    }

    #[test]
    fn test_rank_table_within_bounds() {
        assert!(RANK_KEYWORDS.iter().all(|(_, r)| *r < UNKNOWN_RANK));
    }

    #[test]
    fn test_detect_seniority_first_match() {
        assert_eq!(detect_seniority("SENIOR SOFTWARE ENGINEER"), Some(TechStage::Senior));
        assert_eq!(detect_seniority("JR DEVELOPER"), Some(TechStage::Junior));
        // JUNIOR precedes LEAD in the table.
        assert_eq!(detect_seniority("JUNIOR TEAM LEAD"), Some(TechStage::Junior));
        assert_eq!(detect_seniority("ENGINEERING MANAGER"), Some(TechStage::EngineeringManager));
        assert_eq!(detect_seniority("SOFTWARE ENGINEER"), None);
    }

    #[test]
    fn test_org_rungs_of_manager_family() {
        for category in [
            Category::GerenteCentral,
            Category::GerenteDeArea,
            Category::GerenteAsistente,
            Category::Manager,
        ] {
            assert_eq!(category.org_rung(), Some(OrgRung::Manager));
        }
        assert_eq!(Category::Subgerente.org_rung(), Some(OrgRung::SubManager));
        assert_eq!(Category::ScrumMaster.org_rung(), None);
    }

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(CATEGORY_PATTERNS.len(), CATEGORY_RULES.len());
        assert_eq!(SENIORITY_PATTERNS.len(), SENIORITY_RULES.len());
    }
}
