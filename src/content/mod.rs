//! Fixed teaching material shown next to the calculators
//!
//! Each [`Topic`] carries a title, a subtitle and a short bank of
//! deep-dive questions. The questions are static data; nothing here is
//! computed.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::EbmError;

/// Sections of the reference, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Topic {
    ConfidenceIntervals,
    RiskCalculator,
    OddsCalculator,
    DiagnosticTesting,
    Concepts,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::ConfidenceIntervals,
        Topic::RiskCalculator,
        Topic::OddsCalculator,
        Topic::DiagnosticTesting,
        Topic::Concepts,
    ];

    /// Short code used to select the topic
    pub fn code(&self) -> &'static str {
        match self {
            Topic::ConfidenceIntervals => "CI",
            Topic::RiskCalculator => "RISK",
            Topic::OddsCalculator => "ODDS",
            Topic::DiagnosticTesting => "DIAGNOSTIC",
            Topic::Concepts => "CONCEPTS",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Topic::ConfidenceIntervals => "Confidence Intervals (CI)",
            Topic::RiskCalculator => "Risk Formulas",
            Topic::OddsCalculator => "Odds Formulas",
            Topic::DiagnosticTesting => "Diagnostic Testing",
            Topic::Concepts => "Clinical Significance",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Topic::ConfidenceIntervals => "The Two Golden Rules: Subtracting vs. Dividing",
            Topic::RiskCalculator => "For Cohort Studies & RCTs (Looking FORWARD)",
            Topic::OddsCalculator => "For Case-Control Studies (Looking BACKWARD)",
            Topic::DiagnosticTesting => "Sensitivity, Specificity, PPV, NPV & Likelihood Ratios",
            Topic::Concepts => {
                "The P-Value asks \"If there is a difference\". These concepts ask \"Does it matter?\""
            }
        }
    }

    /// Deep-dive questions for this topic
    pub fn questions(&self) -> &'static [QuizQuestion] {
        match self {
            Topic::ConfidenceIntervals => CONFIDENCE_INTERVAL_QUESTIONS,
            Topic::RiskCalculator => RISK_QUESTIONS,
            Topic::OddsCalculator => ODDS_QUESTIONS,
            Topic::DiagnosticTesting => DIAGNOSTIC_QUESTIONS,
            Topic::Concepts => CONCEPT_QUESTIONS,
        }
    }

    /// Explanatory cards; only the concepts topic has any
    pub fn concepts(&self) -> &'static [Concept] {
        match self {
            Topic::Concepts => CONCEPTS,
            _ => &[],
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Topic {
    type Err = EbmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Topic::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| EbmError::UnknownTopic(s.to_string()))
    }
}

/// A question with its answer and an optional longer explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub explanation: Option<&'static str>,
}

/// A titled explanatory note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Concept {
    pub title: &'static str,
    pub summary: &'static str,
}

/// Every question in the bank, topic by topic
pub fn all_questions() -> impl Iterator<Item = (Topic, &'static QuizQuestion)> {
    Topic::ALL
        .into_iter()
        .flat_map(|t| t.questions().iter().map(move |q| (t, q)))
}

const CONFIDENCE_INTERVAL_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "ci-mean-difference",
        question: "Mean Difference = -4.0 (95% CI: -6.3 to -1.7). Is this significant?",
        answer: "YES.",
        explanation: Some("This is 'Difference' data. The interval is entirely negative and does not include the null value of 0. Therefore, it is statistically significant."),
    },
    QuizQuestion {
        id: "ci-odds-ratio",
        question: "Odds Ratio = 1.07 (95% CI: 0.85 to 1.34). Is this significant?",
        answer: "NO (Null).",
        explanation: Some("This is 'Ratio' data. The interval starts below 1.0 and ends above 1.0. It crosses the null value of 1.0, so there is no statistical difference."),
    },
    QuizQuestion {
        id: "ci-ratio-null",
        question: "Why is the null value '1' for Ratios?",
        answer: "Because if the risk in the treatment group is exactly the same as the control group, dividing them (Risk A ÷ Risk B) equals 1.",
        explanation: None,
    },
];

const RISK_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "risk-rr",
        question: "What does a Relative Risk (RR) of 0.74 mean?",
        answer: "It means 74% of the risk remains in the treated group compared to the control group. Alternatively, it represents a 26% relative reduction in risk.",
        explanation: None,
    },
    QuizQuestion {
        id: "risk-nnt",
        question: "Why do we calculate NNT?",
        answer: "NNT tells us the 'workload'. It's how many patients must receive the treatment to prevent one additional bad outcome. A lower NNT is better.",
        explanation: Some("NNT = 1 / ARR. You cannot calculate NNT from Odds Ratios."),
    },
    QuizQuestion {
        id: "risk-eer-cer",
        question: "What is the difference between EER and CER?",
        answer: "EER (Experimental Event Rate) is the risk in the treatment group. CER (Control Event Rate) is the risk in the control/placebo group.",
        explanation: None,
    },
];

const ODDS_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "odds-no-risk",
        question: "Why can't we calculate Risk (Incidence) in Case-Control studies?",
        answer: "Because we start with the outcome (Sick vs Healthy) and look backwards. We don't know the total population at risk, so we can only compare Odds, not Risk.",
        explanation: None,
    },
    QuizQuestion {
        id: "odds-one",
        question: "What does an Odds Ratio of 1.0 mean?",
        answer: "It means the odds of exposure were the same in cases and controls. There is NO association between the exposure and the disease.",
        explanation: None,
    },
    QuizQuestion {
        id: "odds-smoking",
        question: "A study finds an OR of 4.5 for smoking and lung cancer. Interpret this.",
        answer: "The odds of having smoked are 4.5 times higher in the lung cancer group compared to the healthy group. This suggests smoking is a significant risk factor.",
        explanation: None,
    },
];

const DIAGNOSTIC_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "dx-sens-ppv",
        question: "What is the difference between Sensitivity and PPV?",
        answer: "Sensitivity is a property of the TEST (how good is it at finding disease?). PPV is a property of the RESULT (given a positive test, how likely is it that the patient actually has disease?).",
        explanation: Some("Sensitivity is 'stable' across populations, whereas PPV depends heavily on the prevalence of the disease."),
    },
    QuizQuestion {
        id: "dx-screening",
        question: "Which test is better for screening: High Sensitivity or High Specificity?",
        answer: "High Sensitivity.",
        explanation: Some("SNOUT: Sensitive tests rule OUT. You don't want to miss anyone in a screening (low False Negatives). Confirmatory tests should have high Specificity (SPIN: Specific tests rule IN)."),
    },
    QuizQuestion {
        id: "dx-lr",
        question: "How do Likelihood Ratios help us?",
        answer: "They allow us to move from Pre-Test Probability to Post-Test Probability using a Fagan Nomogram. They are more useful than PPV/NPV because they don't change with prevalence.",
        explanation: None,
    },
];

const CONCEPT_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "concept-weight-loss",
        question: "A weight loss drug causes 0.1 lbs weight loss (p=0.001). Is this good?",
        answer: "Statistically? Yes. Clinically? No. The Effect Size (0.1 lbs) is likely smaller than the MCID (what a patient cares about).",
        explanation: None,
    },
    QuizQuestion {
        id: "concept-alpha",
        question: "What is the usual limit (Alpha) for Type I Error?",
        answer: "0.05 (5%). This means we accept a 5% chance of being wrong (finding a false positive) every time we run a study.",
        explanation: None,
    },
    QuizQuestion {
        id: "concept-type-ii",
        question: "How do you fix a Type II error risk?",
        answer: "Increase the Sample Size. A larger study has more 'Power' to detect a difference if one actually exists.",
        explanation: Some("Think of it like turning up the volume on a radio to hear a faint signal."),
    },
];

const CONCEPTS: &[Concept] = &[
    Concept {
        title: "Effect Size (The Magnitude)",
        summary: "Asks: \"Is the difference BIG?\" A tiny difference can be statistically significant if sample size is huge.",
    },
    Concept {
        title: "MCID (Min. Clinically Important Diff)",
        summary: "Asks: \"Does the patient feel it?\" The smallest benefit a patient can actually perceive. If Effect Size < MCID, the drug is clinically useless, even if P < 0.05.",
    },
    Concept {
        title: "Type I Error (False Alarm)",
        summary: "You say it works, but it doesn't. Culprit: Random Chance (Alpha = 0.05).",
    },
    Concept {
        title: "Type II Error (Missed Opportunity)",
        summary: "You say it doesn't work, but it actually does. Culprit: Sample Size (Low Power).",
    },
];
