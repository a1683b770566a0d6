//! Block registry: the single source of truth for what an empty block of
//! each kind looks like.
//!
//! `empty_block` must stay exhaustive over [`BlockKind`]: adding a variant
//! without extending the match is a compile error, not a runtime surprise.

use newsforge_common::{Clock, IdSource};

use crate::block::*;

/// Build a fully-populated default instance of the given kind
///
/// `id` is the freshly generated block id; nested content (articles) mints
/// its own ids from `ids`.
pub fn empty_block(
    kind: BlockKind,
    id: String,
    ids: &mut dyn IdSource,
    clock: &dyn Clock,
) -> Block {
    let body = match kind {
        BlockKind::Header => BlockBody::Header(HeaderBlock {
            use_animated_logo: None,
            animated_logo_size: None,
            title: "Neurology AI Pulse".to_string(),
            subtitle: "AI in Clinical Neuroscience".to_string(),
            issue_number: "Issue 001".to_string(),
            issue_date: clock.now().format("%B %-d, %Y").to_string(),
            tagline: String::new(),
        }),
        BlockKind::Ticker => BlockBody::Ticker(TickerBlock {
            items: vec!["New headline here".to_string()],
            speed: TickerSpeed::Medium,
        }),
        BlockKind::SectionDivider => BlockBody::SectionDivider(SectionDividerBlock {
            label: "SECTION".to_string(),
            style: DividerStyle::Gradient,
        }),
        BlockKind::ArticleGrid => BlockBody::ArticleGrid(ArticleGridBlock {
            section_title: "Top Stories".to_string(),
            articles: vec![ArticleItem {
                id: ids.new_id(),
                title: "New Article".to_string(),
                source: "Journal".to_string(),
                url: String::new(),
                image_url: Some(String::new()),
                summary: "Article summary here.".to_string(),
                clinical_review: "Clinical review here.".to_string(),
                my_view: "My view here.".to_string(),
                evidence_level: EvidenceLevel::Moderate,
                comments: vec![],
            }],
            columns: 2,
        }),
        BlockKind::Spotlight => BlockBody::Spotlight(SpotlightBlock {
            title: "Spotlight Title".to_string(),
            source: "Journal".to_string(),
            url: String::new(),
            summary: "Summary here.".to_string(),
            clinical_review: "Clinical review here.".to_string(),
            my_view: "My view here.".to_string(),
            evidence_level: EvidenceLevel::Moderate,
            image_url: None,
        }),
        BlockKind::EthicsSplit => BlockBody::EthicsSplit(EthicsSplitBlock {
            topic: "Ethics Topic".to_string(),
            issue: "The issue...".to_string(),
            my_view: "My view...".to_string(),
        }),
        BlockKind::Image => BlockBody::Image(ImageBlock {
            image_url: String::new(),
            caption: "Image caption".to_string(),
            credit: None,
            alt_text: "Image".to_string(),
            alignment: Alignment::Center,
        }),
        BlockKind::Text => BlockBody::Text(TextBlock {
            content: "Text content here.".to_string(),
            heading: Some(String::new()),
        }),
        BlockKind::PromptMasterclass => BlockBody::PromptMasterclass(PromptMasterclassBlock {
            title: "Prompt Masterclass".to_string(),
            prompt: "Your prompt here...".to_string(),
            explanation: "Explanation...".to_string(),
            use_case: "Use case...".to_string(),
        }),
        BlockKind::SbarPrompt => BlockBody::SbarPrompt(SbarPromptBlock {
            title: "Prompt Like a Rockstar".to_string(),
            intro: "Structured prompting framework.".to_string(),
            steps: vec![],
            prompt_template: String::new(),
            safety_notes: vec![],
        }),
        BlockKind::TermOfMonth => BlockBody::TermOfMonth(TermOfMonthBlock {
            term: "Term".to_string(),
            definition: "Definition here.".to_string(),
            clinical_context: "Clinical context here.".to_string(),
        }),
        BlockKind::History => BlockBody::History(HistoryBlock {
            year: "2024".to_string(),
            title: "Historical Event".to_string(),
            content: "Historical content here.".to_string(),
        }),
        BlockKind::Humor => BlockBody::Humor(HumorBlock {
            heading: "Humor Break".to_string(),
            content: "Humor content here.".to_string(),
            attribution: Some(String::new()),
        }),
        BlockKind::Spacer => BlockBody::Spacer(SpacerBlock { height: 24 }),
        BlockKind::Footer => BlockBody::Footer(FooterBlock {
            institution: "Institution".to_string(),
            department: "Department".to_string(),
            contact_email: None,
            unsubscribe_url: "#".to_string(),
            website_url: "#".to_string(),
            copyright_year: clock.now().format("%Y").to_string(),
            disclaimer: String::new(),
            socials: vec![],
            contributors: vec![],
        }),
    };

    Block {
        id,
        style: BlockStyle::default(),
        body,
    }
}
