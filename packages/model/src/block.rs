use serde::{Deserialize, Serialize};

/// A single typed content unit
///
/// Every block shares a stable `id`, optional visual overrides, and a
/// variant-specific content body. The `type` tag and id are immutable for
/// the block's lifetime; blocks are owned exclusively by the document's
/// block map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,

    #[serde(flatten)]
    pub style: BlockStyle,

    #[serde(flatten)]
    pub body: BlockBody,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        self.body.kind()
    }
}

/// Shared visual-override fields (all optional)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_bg_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_text_color: Option<String>,

    /// Padding top/bottom in px
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_padding: Option<u32>,

    /// Base font size override in px
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_font_size: Option<u32>,

    /// Width percentage within the row slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_width: Option<BlockWidth>,
}

/// Width percentage a block occupies within its column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockWidth {
    #[serde(rename = "25")]
    Quarter,
    #[serde(rename = "50")]
    Half,
    #[serde(rename = "75")]
    ThreeQuarters,
    #[serde(rename = "100")]
    Full,
}

/// Closed set of block type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Header,
    Ticker,
    SectionDivider,
    ArticleGrid,
    Spotlight,
    EthicsSplit,
    Image,
    Text,
    PromptMasterclass,
    SbarPrompt,
    TermOfMonth,
    History,
    Humor,
    Spacer,
    Footer,
}

impl BlockKind {
    /// All kinds, in palette order
    pub const ALL: [BlockKind; 15] = [
        BlockKind::Header,
        BlockKind::Ticker,
        BlockKind::SectionDivider,
        BlockKind::ArticleGrid,
        BlockKind::Spotlight,
        BlockKind::EthicsSplit,
        BlockKind::Image,
        BlockKind::Text,
        BlockKind::PromptMasterclass,
        BlockKind::SbarPrompt,
        BlockKind::TermOfMonth,
        BlockKind::History,
        BlockKind::Humor,
        BlockKind::Spacer,
        BlockKind::Footer,
    ];

    /// Human-readable label for block palettes
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Header => "Header",
            BlockKind::Ticker => "Scrolling Ticker",
            BlockKind::SectionDivider => "Section Divider",
            BlockKind::ArticleGrid => "Article Grid",
            BlockKind::Spotlight => "Spotlight Article",
            BlockKind::EthicsSplit => "Ethics Split",
            BlockKind::Image => "Image",
            BlockKind::Text => "Text Block",
            BlockKind::PromptMasterclass => "Prompt Masterclass",
            BlockKind::SbarPrompt => "SBAR-P Framework",
            BlockKind::TermOfMonth => "Term of the Month",
            BlockKind::History => "History Block",
            BlockKind::Humor => "Humor Block",
            BlockKind::Spacer => "Spacer",
            BlockKind::Footer => "Footer",
        }
    }

    /// The kebab-case tag used in the interchange format
    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Ticker => "ticker",
            BlockKind::SectionDivider => "section-divider",
            BlockKind::ArticleGrid => "article-grid",
            BlockKind::Spotlight => "spotlight",
            BlockKind::EthicsSplit => "ethics-split",
            BlockKind::Image => "image",
            BlockKind::Text => "text",
            BlockKind::PromptMasterclass => "prompt-masterclass",
            BlockKind::SbarPrompt => "sbar-prompt",
            BlockKind::TermOfMonth => "term-of-month",
            BlockKind::History => "history",
            BlockKind::Humor => "humor",
            BlockKind::Spacer => "spacer",
            BlockKind::Footer => "footer",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Variant-specific block content
///
/// Internally tagged so each block serializes flat:
/// `{ "id": ..., "type": "text", "content": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockBody {
    Header(HeaderBlock),
    Ticker(TickerBlock),
    SectionDivider(SectionDividerBlock),
    ArticleGrid(ArticleGridBlock),
    Spotlight(SpotlightBlock),
    EthicsSplit(EthicsSplitBlock),
    Image(ImageBlock),
    Text(TextBlock),
    PromptMasterclass(PromptMasterclassBlock),
    SbarPrompt(SbarPromptBlock),
    TermOfMonth(TermOfMonthBlock),
    History(HistoryBlock),
    Humor(HumorBlock),
    Spacer(SpacerBlock),
    Footer(FooterBlock),
}

impl BlockBody {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockBody::Header(_) => BlockKind::Header,
            BlockBody::Ticker(_) => BlockKind::Ticker,
            BlockBody::SectionDivider(_) => BlockKind::SectionDivider,
            BlockBody::ArticleGrid(_) => BlockKind::ArticleGrid,
            BlockBody::Spotlight(_) => BlockKind::Spotlight,
            BlockBody::EthicsSplit(_) => BlockKind::EthicsSplit,
            BlockBody::Image(_) => BlockKind::Image,
            BlockBody::Text(_) => BlockKind::Text,
            BlockBody::PromptMasterclass(_) => BlockKind::PromptMasterclass,
            BlockBody::SbarPrompt(_) => BlockKind::SbarPrompt,
            BlockBody::TermOfMonth(_) => BlockKind::TermOfMonth,
            BlockBody::History(_) => BlockKind::History,
            BlockBody::Humor(_) => BlockKind::Humor,
            BlockBody::Spacer(_) => BlockKind::Spacer,
            BlockBody::Footer(_) => BlockKind::Footer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_animated_logo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated_logo_size: Option<u32>,
    pub title: String,
    pub subtitle: String,
    pub issue_number: String,
    pub issue_date: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerBlock {
    pub items: Vec<String>,
    pub speed: TickerSpeed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickerSpeed {
    Slow,
    Medium,
    Fast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDividerBlock {
    pub label: String,
    pub style: DividerStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    Line,
    Gradient,
    Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleGridBlock {
    pub section_title: String,
    pub articles: Vec<ArticleItem>,
    /// 1, 2 or 3 columns
    pub columns: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub summary: String,
    pub clinical_review: String,
    pub my_view: String,
    pub evidence_level: EvidenceLevel,
    pub comments: Vec<ArticleComment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvidenceLevel {
    High,
    Moderate,
    Low,
    #[serde(rename = "Expert Opinion")]
    ExpertOpinion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleComment {
    pub id: String,
    pub author: String,
    pub role: String,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotlightBlock {
    pub title: String,
    pub source: String,
    pub url: String,
    pub summary: String,
    pub clinical_review: String,
    pub my_view: String,
    pub evidence_level: EvidenceLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthicsSplitBlock {
    pub topic: String,
    pub issue: String,
    pub my_view: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub image_url: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
    pub alt_text: String,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptMasterclassBlock {
    pub title: String,
    pub prompt: String,
    pub explanation: String,
    pub use_case: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SbarPromptBlock {
    pub title: String,
    pub intro: String,
    pub steps: Vec<SbarStep>,
    /// The full editable prompt example
    pub prompt_template: String,
    pub safety_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SbarStep {
    /// S, B, A, R or P
    pub letter: String,
    pub name: String,
    pub description: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermOfMonthBlock {
    pub term: String,
    pub definition: String,
    pub clinical_context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryBlock {
    pub year: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumorBlock {
    pub heading: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerBlock {
    /// Height in px
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterBlock {
    pub institution: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    pub unsubscribe_url: String,
    pub website_url: String,
    pub copyright_year: String,
    pub disclaimer: String,
    pub socials: Vec<SocialLink>,
    pub contributors: Vec<Contributor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
