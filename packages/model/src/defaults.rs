//! Built-in starter document used at application start and on
//! "new newsletter".

use std::collections::HashMap;

use newsforge_common::{Clock, IdSource};

use crate::block::*;
use crate::document::{Newsletter, NewsletterMeta, Row, RowLayout};
use crate::theme::ThemePreset;

/// Build the default starter issue
///
/// Layout mirrors the shipped template: header, ticker, divider, article
/// grid, spotlight, divider, two 2-col rows (ethics/SBAR and term/history),
/// humor, spacer, footer.
pub fn default_newsletter(ids: &mut dyn IdSource, clock: &dyn Clock) -> Newsletter {
    let header_id = ids.new_id();
    let ticker_id = ids.new_id();
    let div1_id = ids.new_id();
    let grid_id = ids.new_id();
    let spot_id = ids.new_id();
    let div2_id = ids.new_id();
    let ethics_id = ids.new_id();
    let sbar_id = ids.new_id();
    let term_id = ids.new_id();
    let history_id = ids.new_id();
    let humor_id = ids.new_id();
    let spacer_id = ids.new_id();
    let footer_id = ids.new_id();

    let now = clock.timestamp();

    let rows = vec![
        one_col(ids, &header_id),
        one_col(ids, &ticker_id),
        one_col(ids, &div1_id),
        one_col(ids, &grid_id),
        one_col(ids, &spot_id),
        one_col(ids, &div2_id),
        two_col(ids, &ethics_id, &sbar_id),
        two_col(ids, &term_id, &history_id),
        one_col(ids, &humor_id),
        one_col(ids, &spacer_id),
        one_col(ids, &footer_id),
    ];

    let mut blocks = HashMap::new();

    blocks.insert(
        header_id.clone(),
        plain(
            &header_id,
            BlockBody::Header(HeaderBlock {
                use_animated_logo: None,
                animated_logo_size: None,
                title: "The Neurology AI Pulse".to_string(),
                subtitle: "Artificial Intelligence in Clinical Neuroscience".to_string(),
                issue_number: "Issue 001".to_string(),
                issue_date: clock.now().format("%B %-d, %Y").to_string(),
                tagline: "Edited by the Department of Neurology".to_string(),
            }),
        ),
    );

    blocks.insert(
        ticker_id.clone(),
        plain(
            &ticker_id,
            BlockBody::Ticker(TickerBlock {
                items: vec![
                    "Nature Medicine: AI CT screening reaches 94.3% sensitivity across 47 RCTs"
                        .to_string(),
                    "AHA Class IIa: AI ECG now recommended for AF screening in adults 65+"
                        .to_string(),
                    "JAMA RCT: Ambient AI scribes reduce physician burnout 34% at 6 months"
                        .to_string(),
                    "FDA authorizes record 692 AI medical devices in 2024".to_string(),
                ],
                speed: TickerSpeed::Medium,
            }),
        ),
    );

    blocks.insert(
        div1_id.clone(),
        plain(
            &div1_id,
            BlockBody::SectionDivider(SectionDividerBlock {
                label: "TOP NEUROLOGY AI NEWS".to_string(),
                style: DividerStyle::Gradient,
            }),
        ),
    );

    blocks.insert(
        grid_id.clone(),
        plain(
            &grid_id,
            BlockBody::ArticleGrid(ArticleGridBlock {
                section_title: "This Week in Neurology AI".to_string(),
                columns: 2,
                articles: vec![
                    ArticleItem {
                        id: ids.new_id(),
                        title: "Retraining Machine Learning Models for Seizure Classification"
                            .to_string(),
                        source: "Nature".to_string(),
                        url: "https://www.nature.com".to_string(),
                        image_url: Some(String::new()),
                        summary: "Optimized deep learning architectures achieve seizure \
                                  classification accuracy exceeding 90% on the Temple \
                                  University corpus, addressing the need for faster EEG \
                                  interpretation in EMU and ICU settings."
                            .to_string(),
                        clinical_review: "Achieving >90% accuracy in busy EMU or ICU settings \
                                          reduces cognitive load on neurologists and enables \
                                          faster treatment decisions."
                            .to_string(),
                        my_view: "This meaningfully changes practice by improving throughput \
                                  of EEG screening at scale, without replacing \
                                  neurophysiologist judgment."
                            .to_string(),
                        evidence_level: EvidenceLevel::Moderate,
                        comments: vec![ArticleComment {
                            id: ids.new_id(),
                            author: "Dr. Jai Shahani".to_string(),
                            role: "Attending Neurologist".to_string(),
                            text: "We should explore piloting this in our EMU. The false \
                                   positive rate on artifacts needs clarification first."
                                .to_string(),
                            timestamp: now.clone(),
                        }],
                    },
                    ArticleItem {
                        id: ids.new_id(),
                        title: "AI Reads Brain MRIs in Seconds, Flags Emergencies at 94.6% \
                                Accuracy"
                            .to_string(),
                        source: "ScienceDaily".to_string(),
                        url: "https://www.sciencedaily.com".to_string(),
                        image_url: Some(String::new()),
                        summary: "A deep-learning tool trained on 14,000 scans flags \
                                  hemorrhages and strokes in seconds, prioritizing critical \
                                  findings for radiologists."
                            .to_string(),
                        clinical_review: "Automated triage of acute injuries can reduce \
                                          door-to-needle times in high-volume stroke centers."
                            .to_string(),
                        my_view: "The implementation challenge is PACS integration and clear \
                                  human-in-the-loop protocols, not the accuracy figures."
                            .to_string(),
                        evidence_level: EvidenceLevel::High,
                        comments: vec![],
                    },
                ],
            }),
        ),
    );

    blocks.insert(
        spot_id.clone(),
        plain(
            &spot_id,
            BlockBody::Spotlight(SpotlightBlock {
                title: "A Simple Twist Fooled AI and Revealed a Flaw in Medical Ethics \
                        Guardrails"
                    .to_string(),
                source: "ScienceDaily".to_string(),
                url: "https://www.sciencedaily.com".to_string(),
                summary: "Medical AI models can be manipulated through simple linguistic \
                          techniques to bypass ethical guardrails and provide harmful advice, \
                          exposing vulnerabilities in current AI governance."
                    .to_string(),
                clinical_review: "This threatens the principle of non-maleficence and \
                                  systemic trust in AI-augmented clinical decision-making."
                    .to_string(),
                my_view: "Regulatory bodies need to require adversarial robustness testing \
                          as a precondition for clearance."
                    .to_string(),
                evidence_level: EvidenceLevel::ExpertOpinion,
                image_url: None,
            }),
        ),
    );

    blocks.insert(
        div2_id.clone(),
        plain(
            &div2_id,
            BlockBody::SectionDivider(SectionDividerBlock {
                label: "PERSPECTIVES & SKILLS".to_string(),
                style: DividerStyle::Gradient,
            }),
        ),
    );

    blocks.insert(
        ethics_id.clone(),
        plain(
            &ethics_id,
            BlockBody::EthicsSplit(EthicsSplitBlock {
                topic: "Algorithmic Bias in Neurology AI: Who Gets Left Behind?".to_string(),
                issue: "Most published neurology AI models are trained on data from academic \
                        centers with known underrepresentation of minority and rural \
                        populations, so risk prediction may systematically underperform \
                        where it matters most."
                    .to_string(),
                my_view: "Regulators must require prospective demographic stratification of \
                          performance data before clearance. This is a patient safety \
                          imperative."
                    .to_string(),
            }),
        ),
    );

    blocks.insert(
        sbar_id.clone(),
        plain(
            &sbar_id,
            BlockBody::SbarPrompt(SbarPromptBlock {
                title: "Prompt Like a Rockstar: The SBAR-P Framework".to_string(),
                intro: "High-yield prompting begins with the SBAR-P framework, adapted from \
                        clinical handover protocols. Master prompting, master AI."
                    .to_string(),
                steps: vec![
                    sbar_step(
                        "S",
                        "Situation",
                        "Define your persona and state the clinical context clearly.",
                        "\"Act as a Senior Neurologist. My patient is a 67F presenting with \
                         subacute onset expressive aphasia...\"",
                    ),
                    sbar_step(
                        "B",
                        "Background",
                        "Provide relevant history, comorbidities and investigations.",
                        "\"PMH: hypertension, AF on apixaban. MRI brain: FLAIR \
                         hyperintensity left MCA territory.\"",
                    ),
                    sbar_step(
                        "A",
                        "Ask",
                        "Be explicit and verb-driven; request a specific format.",
                        "\"Generate a prioritised differential of the top 5 causes.\"",
                    ),
                    sbar_step(
                        "R",
                        "Role",
                        "Assign a clinical persona aligned with your question.",
                        "\"Respond as a vascular neurologist preparing for an MDT meeting.\"",
                    ),
                    sbar_step(
                        "P",
                        "Parameters",
                        "Set safety guardrails: evidence base, uncertainty disclosure.",
                        "\"Use current AHA/ASA stroke guidelines. Flag areas of \
                         uncertainty. Think step-by-step.\"",
                    ),
                ],
                prompt_template: "Act as a [SPECIALTY] specialist.\n\n\
                                  Patient: [AGE] [SEX], [SETTING]\n\
                                  Presentation: [CHIEF COMPLAINT] for [DURATION]\n\
                                  Task: [SPECIFIC QUESTION]\n\
                                  Format: [LIST / TABLE / SUMMARY]\n\n\
                                  Think step-by-step. Flag any recommendation where \
                                  evidence is limited. Do not fabricate lab values, imaging \
                                  findings, or drug doses."
                    .to_string(),
                safety_notes: vec![
                    "Verify all outputs against primary sources before acting.".to_string(),
                    "Never enter identifiable patient data into consumer AI tools."
                        .to_string(),
                    "Clinical judgement remains paramount; AI is decision support."
                        .to_string(),
                ],
            }),
        ),
    );

    blocks.insert(
        term_id.clone(),
        plain(
            &term_id,
            BlockBody::TermOfMonth(TermOfMonthBlock {
                term: "Foundation Model".to_string(),
                definition: "A large-scale AI system trained on a vast, diverse dataset that \
                             serves as a versatile base for many different tasks, learning \
                             broad patterns adaptable to multiple clinical functions."
                    .to_string(),
                clinical_context: "A vision foundation model trained on brain MRIs can flag \
                                   strokes, mass effects and hemorrhages without a separate \
                                   algorithm for each condition."
                    .to_string(),
            }),
        ),
    );

    blocks.insert(
        history_id.clone(),
        plain(
            &history_id,
            BlockBody::History(HistoryBlock {
                year: "1950".to_string(),
                title: "The Dawn of AI: The Turing Test".to_string(),
                content: "Alan Turing's Computing Machinery and Intelligence posed the \
                          question \"Can machines think?\" and proposed the Imitation Game, \
                          shifting AI from philosophy to practical experimentation."
                    .to_string(),
            }),
        ),
    );

    blocks.insert(
        humor_id.clone(),
        plain(
            &humor_id,
            BlockBody::Humor(HumorBlock {
                heading: "Neural Network Humor".to_string(),
                content: "My AI dictation system transcribed \"patient denies diplopia\" as \
                          \"patient denies diplopia, but suspects the government.\""
                    .to_string(),
                attribution: Some("Submitted anonymously by an attending".to_string()),
            }),
        ),
    );

    blocks.insert(
        spacer_id.clone(),
        plain(&spacer_id, BlockBody::Spacer(SpacerBlock { height: 24 })),
    );

    blocks.insert(
        footer_id.clone(),
        plain(
            &footer_id,
            BlockBody::Footer(FooterBlock {
                institution: "Northwell Health".to_string(),
                department: "Department of Neurology".to_string(),
                contact_email: Some("neurology@example.org".to_string()),
                unsubscribe_url: "#".to_string(),
                website_url: "https://www.northwell.edu/neurology".to_string(),
                copyright_year: clock.now().format("%Y").to_string(),
                disclaimer: "This newsletter is for educational purposes only and does not \
                             constitute medical advice."
                    .to_string(),
                socials: vec![],
                contributors: vec![
                    Contributor {
                        id: ids.new_id(),
                        name: "Yasir El-Sherif, MD PhD".to_string(),
                        role: "Editor-in-Chief".to_string(),
                        url: Some(String::new()),
                    },
                    Contributor {
                        id: ids.new_id(),
                        name: "Jai Shahani, MD".to_string(),
                        role: "Associate Editor".to_string(),
                        url: Some(String::new()),
                    },
                ],
            }),
        ),
    );

    Newsletter {
        meta: NewsletterMeta {
            id: ids.new_id(),
            title: "The Neurology AI Pulse".to_string(),
            issue_number: "001".to_string(),
            created_at: now.clone(),
            updated_at: now,
            version: 1,
        },
        theme: ThemePreset::Northwell.theme(),
        rows,
        blocks,
    }
}

fn plain(id: &str, body: BlockBody) -> Block {
    Block {
        id: id.to_string(),
        style: BlockStyle::default(),
        body,
    }
}

fn one_col(ids: &mut dyn IdSource, block_id: &str) -> Row {
    Row {
        id: ids.new_id(),
        layout: RowLayout::OneCol,
        block_ids: vec![block_id.to_string()],
    }
}

fn two_col(ids: &mut dyn IdSource, left: &str, right: &str) -> Row {
    Row {
        id: ids.new_id(),
        layout: RowLayout::TwoCol,
        block_ids: vec![left.to_string(), right.to_string()],
    }
}

fn sbar_step(letter: &str, name: &str, description: &str, example: &str) -> SbarStep {
    SbarStep {
        letter: letter.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        example: example.to_string(),
    }
}
