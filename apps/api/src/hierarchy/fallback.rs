//! Keyword fallback rules — generic superior titles for when rank and
//! category search find nothing.
//!
//! Ordered: the first rule with any keyword present in the title applies.

use crate::hierarchy::normalize::contains_keyword;

/// (keywords, generic superior title). Titles are already in normalized form.
const FALLBACK_RULES: &[(&[&str], &str)] = &[
    // Gerencia
    (&["GERENTE DE AREA", "GERENTE ZONAL"], "GERENTE CENTRAL"),
    (&["GERENTE DE DIVISION", "GERENTE TIENDA"], "GERENTE DE AREA"),
    (&["GERENTE ASISTENTE"], "GERENTE"),
    (&["SUBGERENTE", "SUB-GERENTE"], "GERENTE"),
    // Jefatura
    (&["JEFE ZONAL", "JEFE COMERCIAL"], "SUBGERENTE"),
    (&["JEFE", "TEAM MANAGER"], "SUBGERENTE"),
    (&["LIDER DE", "LEAD DE", "COORDINADOR"], "JEFE"),
    (&["SUPERVISOR"], "JEFE"),
    // Agile
    (&["SCRUM MASTER", "AGILE TEAM FACILITATOR"], "TEAM MANAGER"),
    (&["AGILE COACH"], "SUBGERENTE"),
    (&["TEAM LEADER"], "TEAM MANAGER"),
    // Specialists
    (&["PRINCIPAL EXPERT", "PRINCIPAL LEAD", "PRINCIPAL ENGINEER"], "SUBGERENTE"),
    (&["PRINCIPAL"], "SUBGERENTE"),
    (&["SPECIALIST", "ESPECIALISTA", "EXPERT", "ADVISOR"], "JEFE"),
    (&["ARCHITECT"], "SUBGERENTE"),
    // Product, design, data, growth
    (&["GROWTH HACKER", "GROWTH LEAD"], "SUBGERENTE"),
    (&["GROWTH"], "JEFE"),
    (&["PRODUCT DESIGNER", "DESIGN LEAD", "CONVERSATION DESIGN LEAD"], "SUBGERENTE"),
    (&["DESIGNER", "CONVERSATION DESIGNER"], "TEAM LEADER"),
    (&["PRODUCT LEAD", "DIGITAL PRODUCT LEAD"], "SUBGERENTE"),
    (&["PRODUCT", "DIGITAL PRODUCT"], "TEAM LEADER"),
    (&["DATA SCIENTIST ADVISOR", "DATA SCIENTIST EXPERT"], "SUBGERENTE"),
    (&["DATA SCIENTIST LEAD"], "SUBGERENTE"),
    (&["DATA SCIENTIST"], "TEAM LEADER"),
    (&["DATA ENGINEER"], "TEAM LEADER"),
    (&["DATA ANALYST ADVISOR"], "JEFE"),
    (&["DATA ANALYST"], "SUPERVISOR"),
    (&["BUSINESS DESIGNER", "BUSINESS ARCHITECT LEAD"], "SUBGERENTE"),
    (&["BUSINESS ARCHITECT", "BUSINESS ANALYST"], "TEAM LEADER"),
    (&["BUSINESS"], "SUPERVISOR"),
    // Engineers
    (&["SOFTWARE TEST ENGINEER", "SOFTWARE ENGINEER", "ENGINEER"], "TEAM LEADER"),
    // Analysts
    (&["ANALISTA SR", "ANALISTA SENIOR"], "JEFE"),
    (&["ANALISTA DE", "ANALISTA", "ANALYST"], "SUPERVISOR"),
    // Executives
    (&["RELATIONSHIP MANAGER"], "JEFE"),
    (&["EJECUTIVO DE", "EJECUTIVO"], "SUPERVISOR"),
    // Support
    (&["GESTOR", "ASESOR"], "SUPERVISOR"),
    (&["CAMPAIGN PRINCIPAL LEAD"], "SUBGERENTE"),
    (&["CAMPAIGN"], "TEAM LEADER"),
    (&["ASSOCIATE"], "ANALISTA"),
    (&["ASISTENTE DE", "ASISTENTE"], "ANALISTA"),
    (&["REPRESENTANTE"], "EJECUTIVO"),
    (&["TECNICO"], "ESPECIALISTA"),
    (&["AUXILIAR", "TRAMITADOR"], "ASISTENTE"),
    // Entry level
    (&["TRAINEE"], "ASISTENTE"),
    (&["PRACTICANTE", "INTERN"], "ASISTENTE"),
    (&["JUNIOR", "JR"], "ANALISTA"),
    (&["CX", "REAL TIME OPERATION"], "SUPERVISOR"),
];

/// Generic superior title for a normalized title, from the first matching rule.
pub fn fallback_superior(title: &str) -> Option<&'static str> {
    FALLBACK_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| contains_keyword(title, kw)))
        .map(|(_, superior)| *superior)
}
