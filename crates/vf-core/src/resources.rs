//! Static educational content shown by `verifact resources`.

use serde::Serialize;

/// Manual fact-checking tips, in display order.
pub const FACT_CHECKING_TIPS: &[&str] = &[
    "Check the source - Is it a reputable news organization?",
    "Look for author credentials and contact information",
    "Verify the date - Is this current or outdated information?",
    "Cross-reference with multiple reliable sources",
    "Be skeptical of sensational headlines or emotional language",
    "Check if the story is reported by other major news outlets",
    "Look for supporting evidence and citations",
    "Be wary of stories that confirm your existing beliefs without question",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactCheckSite {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub const FACT_CHECKING_SITES: &[FactCheckSite] = &[
    FactCheckSite {
        name: "Snopes",
        url: "https://snopes.com",
        description: "Fact-checking urban legends and misinformation",
    },
    FactCheckSite {
        name: "PolitiFact",
        url: "https://politifact.com",
        description: "Political fact-checking and truth-o-meter",
    },
    FactCheckSite {
        name: "FactCheck.org",
        url: "https://factcheck.org",
        description: "Nonpartisan fact-checking of politics",
    },
    FactCheckSite {
        name: "AP Fact Check",
        url: "https://apnews.com/hub/ap-fact-check",
        description: "Associated Press fact-checking",
    },
];
