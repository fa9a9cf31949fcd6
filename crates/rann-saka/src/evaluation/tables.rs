use super::catalog::{CategorySpec, IndicatorSpec};
use super::domain::Tier;

/// Workplace feedback and accusation indicators.
pub(crate) const GENERAL_CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "Feedback and communication",
        indicators: &[
            IndicatorSpec {
                label: "Consistent negative feedback",
                description: "Frequent negative feedback, regardless of performance or improvement",
                tier: Tier::Most,
                weight: 1.3,
            },
            IndicatorSpec {
                label: "Vague or non-specific criticism",
                description: "Criticism that lacks clear and actionable points",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Personal rather than professional feedback",
                description: "Feedback focuses on personal traits rather than professional skills",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Contradictory information",
                description: "Receiving conflicting instructions or feedback",
                tier: Tier::Most,
                weight: 1.1,
            },
            IndicatorSpec {
                label: "Inconsistency over time",
                description: "Feedback or expectations that change unpredictably over time",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Contradiction with documented facts",
                description: "Feedback or claims that contradict documented evidence",
                tier: Tier::Most,
                weight: 1.2,
            },
            IndicatorSpec {
                label: "Discrepancy with colleague feedback",
                description: "Significant differences between feedback from different colleagues",
                tier: Tier::Moderate,
                weight: 0.9,
            },
            IndicatorSpec {
                label: "Unwillingness to provide details",
                description: "Reluctance to give detailed information or clarification",
                tier: Tier::Less,
                weight: 0.8,
            },
            IndicatorSpec {
                label: "Feedback based on rumor or speculation",
                description: "Feedback that is not based on direct observation or evidence",
                tier: Tier::Moderate,
                weight: 0.9,
            },
            IndicatorSpec {
                label: "Unconstructive feedback",
                description: "Feedback that doesn't offer a clear path to improvement",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Frequent criticism",
                description: "Regular and persistent criticism",
                tier: Tier::Less,
                weight: 0.9,
            },
            IndicatorSpec {
                label: "Inconsistency",
                description: "Lack of consistency in feedback or expectations",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Personal, not professional",
                description: "Focus on personal attributes rather than professional performance",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Public criticism",
                description: "Criticism delivered in a public setting",
                tier: Tier::Less,
                weight: 0.8,
            },
            IndicatorSpec {
                label: "No recognition of improvement",
                description: "Ignoring or not acknowledging improvements made",
                tier: Tier::Moderate,
                weight: 0.9,
            },
            IndicatorSpec {
                label: "Feedback contrary to previous evaluations",
                description: "Feedback that contradicts earlier evaluations",
                tier: Tier::Most,
                weight: 1.2,
            },
        ],
    },
    CategorySpec {
        name: "Career impact and professionalism",
        indicators: &[
            IndicatorSpec {
                label: "Decline in job offers",
                description: "Noticeable decrease in job offers or opportunities",
                tier: Tier::Most,
                weight: 1.4,
            },
            IndicatorSpec {
                label: "Impact on career opportunities",
                description: "Feedback that adversely affects future career prospects",
                tier: Tier::Most,
                weight: 1.1,
            },
            IndicatorSpec {
                label: "Isolation from collaborative opportunities",
                description: "Exclusion from opportunities for teamwork and collaboration",
                tier: Tier::Less,
                weight: 0.8,
            },
            IndicatorSpec {
                label: "Exclusion from professional development",
                description: "Being left out of professional growth and development opportunities",
                tier: Tier::Less,
                weight: 0.7,
            },
            IndicatorSpec {
                label: "Impact on morale",
                description: "Feedback that negatively affects morale",
                tier: Tier::Moderate,
                weight: 0.9,
            },
            IndicatorSpec {
                label: "Negative feedback on areas outside of their oversight",
                description: "Criticism about aspects outside the employee's control or responsibility",
                tier: Tier::Less,
                weight: 0.7,
            },
            IndicatorSpec {
                label: "Timing of the accusations or feedback",
                description: "Feedback timing that may have ulterior motives or context",
                tier: Tier::Less,
                weight: 0.8,
            },
        ],
    },
    CategorySpec {
        name: "Authenticity and credibility",
        indicators: &[
            IndicatorSpec {
                label: "Lack of credibility",
                description: "Feedback or instructions lack grounding in facts or reality",
                tier: Tier::Most,
                weight: 1.3,
            },
            IndicatorSpec {
                label: "Unverifiable or exaggerated claims",
                description: "Claims or accusations that cannot be substantiated",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Lack of objective evidence",
                description: "Feedback not supported by objective facts or data",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Unusual communication from prospective employers",
                description: "Unexpected or unconventional communication styles from potential employers",
                tier: Tier::Less,
                weight: 0.9,
            },
            IndicatorSpec {
                label: "Legal action threats",
                description: "Threats of legal action in response to actions or performance",
                tier: Tier::Most,
                weight: 1.3,
            },
            IndicatorSpec {
                label: "Direct warnings",
                description: "Explicit warnings about performance or behavior",
                tier: Tier::Most,
                weight: 1.2,
            },
            IndicatorSpec {
                label: "Excessive focus on minor errors",
                description: "Overemphasis on small mistakes",
                tier: Tier::Moderate,
                weight: 0.9,
            },
            IndicatorSpec {
                label: "Ignoring context",
                description: "Overlooking the context or circumstances of actions or performance",
                tier: Tier::Moderate,
                weight: 0.9,
            },
        ],
    },
    CategorySpec {
        name: "Management and Support",
        indicators: &[
            IndicatorSpec {
                label: "Lack of support",
                description: "Insufficient support or resources for the role",
                tier: Tier::Less,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Comparisons with others",
                description: "Unfavorable comparisons with other colleagues",
                tier: Tier::Less,
                weight: 0.7,
            },
        ],
    },
];

/// Indicators of unfounded allegations against security and penetration testing staff.
pub(crate) const CYBERSECURITY_CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "Authorization and access control",
        indicators: &[
            IndicatorSpec {
                label: "Unsubstantiated accusations of malicious activity",
                description: "Accusations without concrete proof",
                tier: Tier::Most,
                weight: 1.3,
            },
            IndicatorSpec {
                label: "Inconsistent evidence of unauthorized access",
                description: "Conflicting evidence or lack thereof for access breaches",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Claims of data tampering without proof",
                description: "Allegations of data alteration lacking substantiation",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Allegations of unauthorized network monitoring",
                description: "claims of unauthorized surveillance or network monitoring without proof",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Claims of inappropriate data access",
                description: "allegations of accessing sensitive data without permission, lacking verification",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Allegations of misuse of privileges",
                description: "Charges of privilege abuse without corroborating evidence",
                tier: Tier::Most,
                weight: 1.1,
            },
            IndicatorSpec {
                label: "Accusations of bypassing protocols without evidence",
                description: "Charges of ignoring procedures without proof",
                tier: Tier::Less,
                weight: 0.7,
            },
            IndicatorSpec {
                label: "Unverified reports of security protocol violations",
                description: "claims of security procedures being violated without substantial evidence",
                tier: Tier::Most,
                weight: 1.2,
            },
            IndicatorSpec {
                label: "Misinterpreted penetration testing actions",
                description: "legitimate penetration testing activities perceived as malicious acts",
                tier: Tier::Most,
                weight: 1.1,
            },
            IndicatorSpec {
                label: "Insufficient explanation of tools used",
                description: "Lack of clarity about the tools used in penetration testing",
                tier: Tier::Less,
                weight: 0.8,
            },
        ],
    },
    CategorySpec {
        name: "Reporting and documentation",
        indicators: &[
            IndicatorSpec {
                label: "Discrepancies in incident reports",
                description: "Conflicting information in reports of security incidents",
                tier: Tier::Moderate,
                weight: 1.1,
            },
            IndicatorSpec {
                label: "Lack of corroboration in security logs",
                description: "Security logs that do not support the allegations made",
                tier: Tier::Moderate,
                weight: 1.2,
            },
            IndicatorSpec {
                label: "Vague or ambiguous forensic analysis",
                description: "Forensic findings that are unclear or open to interpretation",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Speculative conclusions in investigation reports",
                description: "Conclusions based more on guesswork than evidence",
                tier: Tier::Moderate,
                weight: 0.9,
            },
            IndicatorSpec {
                label: "Incorrect attribution of malware introduction",
                description: "blaming personnel for introducing malware without evidence",
                tier: Tier::Most,
                weight: 1.1,
            },
            IndicatorSpec {
                label: "Inconclusive or misinterpreted audit trails",
                description: "Audit data that is unclear or misread",
                tier: Tier::Less,
                weight: 0.9,
            },
        ],
    },
    CategorySpec {
        name: "Conduct and misunderstandings",
        indicators: &[
            IndicatorSpec {
                label: "Misconstrued intentions in security testing",
                description: "misinterpretation of security testing procedures as harmful intentions",
                tier: Tier::Moderate,
                weight: 1.2,
            },
            IndicatorSpec {
                label: "Unsatisfactory responses to methodology clarification requests",
                description: "Responses to inquiries about methods used are inadequate or evasive, potentially leading to misunderstandings or false accusations",
                tier: Tier::Moderate,
                weight: 0.9,
            },
            IndicatorSpec {
                label: "Generalizations in accusation without specifics",
                description: "Broad accusations lacking specific details",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Public disclosure of unverified claims",
                description: "Sharing unconfirmed allegations publicly",
                tier: Tier::Less,
                weight: 0.8,
            },
            IndicatorSpec {
                label: "Threats of legal action without basis",
                description: "Unsupported legal threats over alleged actions",
                tier: Tier::Most,
                weight: 1.3,
            },
        ],
    },
    CategorySpec {
        name: "Team dynamics and communication",
        indicators: &[
            IndicatorSpec {
                label: "Impact of accusations on professional reputation",
                description: "Allegations that could harm one's professional standing",
                tier: Tier::Most,
                weight: 1.3,
            },
            IndicatorSpec {
                label: "Contradictory witness statements",
                description: "Conflicting accounts from different individuals",
                tier: Tier::Moderate,
                weight: 1.2,
            },
            IndicatorSpec {
                label: "Inconsistent testimony from team members",
                description: "Differing accounts of events from team members",
                tier: Tier::Moderate,
                weight: 0.9,
            },
            IndicatorSpec {
                label: "Personal motives in professional accusations",
                description: "Suspected personal biases influencing professional charges",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Inconsistency in accusation details",
                description: "Variances in the details or descriptions of accusations",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Mistaken identity in cyber attack attribution",
                description: "incorrectly identifying individuals as responsible for cyber attacks",
                tier: Tier::Moderate,
                weight: 1.2,
            },
            IndicatorSpec {
                label: "Frequency of unsubstantiated claims",
                description: "Regular occurrence of claims without backing evidence",
                tier: Tier::Less,
                weight: 0.9,
            },
            IndicatorSpec {
                label: "Timing of security alerts and incidents",
                description: "Suspicious timing of alerts that may imply ulterior motives",
                tier: Tier::Moderate,
                weight: 1.2,
            },
            IndicatorSpec {
                label: "Accusations of neglecting security warnings",
                description: "charges of ignoring important security warnings without factual basis",
                tier: Tier::Moderate,
                weight: 1.0,
            },
            IndicatorSpec {
                label: "Assumed complicity in security breaches",
                description: "wrongful assumptions of involvement in security breaches",
                tier: Tier::Most,
                weight: 1.3,
            },
            IndicatorSpec {
                label: "Unfounded blame for data leaks",
                description: "baseless accusations of causing or contributing to data leaks",
                tier: Tier::Moderate,
                weight: 1.2,
            },
        ],
    },
];
