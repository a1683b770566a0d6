use newsforge_model::{
    Alignment, Block, BlockBody, DividerStyle, Newsletter, Row, Theme,
};

/// Options for HTML export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty print the markup
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Include Google Fonts preconnect/stylesheet links
    pub font_links: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            font_links: true,
        }
    }
}

struct Context {
    options: ExportOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: ExportOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            let indent = self.options.indent.clone();
            for _ in 0..self.depth {
                self.buffer.push_str(&indent);
            }
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Download filename for the HTML artifact
pub fn html_filename(newsletter: &Newsletter) -> String {
    format!("newsforge-issue-{}.html", newsletter.meta.issue_number)
}

/// Download filename for the print-ready artifact
pub fn print_filename(newsletter: &Newsletter) -> String {
    format!("newsforge-issue-{}-print.html", newsletter.meta.issue_number)
}

/// Render the document as a standalone HTML page
pub fn export_html(newsletter: &Newsletter, options: &ExportOptions) -> String {
    build_document(newsletter, options, false)
}

/// Render a print-ready page: adds `@page` rules and a script that waits
/// for fonts and images before opening the print dialog
pub fn export_print_html(newsletter: &Newsletter, options: &ExportOptions) -> String {
    build_document(newsletter, options, true)
}

fn build_document(newsletter: &Newsletter, options: &ExportOptions, print: bool) -> String {
    let mut ctx = Context::new(options.clone());

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\" />");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />");
    ctx.add_line(&format!(
        "<title>{} — Issue {}</title>",
        escape_html(&newsletter.meta.title),
        escape_html(&newsletter.meta.issue_number)
    ));
    if ctx.options.font_links {
        ctx.add_line("<link rel=\"preconnect\" href=\"https://fonts.googleapis.com\" />");
        ctx.add_line(
            "<link href=\"https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;600;700&family=IBM+Plex+Sans:wght@300;400;500;600&family=IBM+Plex+Mono:wght@400;500&display=swap\" rel=\"stylesheet\" />",
        );
    }
    ctx.add_line("<style>");
    ctx.add(&theme_css(&newsletter.theme));
    ctx.add(BASE_CSS);
    if print {
        ctx.add(PRINT_CSS);
    }
    ctx.add_line("</style>");
    ctx.dedent();
    ctx.add_line("</head>");
    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<div class=\"newsletter-preview\">");
    ctx.indent();

    for row in &newsletter.rows {
        compile_row(newsletter, row, &mut ctx);
    }

    ctx.dedent();
    ctx.add_line("</div>");
    if print {
        ctx.add(PRINT_TRIGGER_SCRIPT);
    }
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_row(newsletter: &Newsletter, row: &Row, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<div class=\"newsletter-row {}\">",
        row.layout.css_class()
    ));
    ctx.indent();
    for block_id in &row.block_ids {
        // Dangling ids cannot occur in a document that passed integrity,
        // but the projection stays total regardless
        if let Some(block) = newsletter.block(block_id) {
            compile_block(block, ctx);
        }
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_block(block: &Block, ctx: &mut Context) {
    let class = format!("block block-{}", block.kind().tag());
    let style = inline_style(block);
    if style.is_empty() {
        ctx.add_line(&format!("<div class=\"{}\">", class));
    } else {
        ctx.add_line(&format!("<div class=\"{}\" style=\"{}\">", class, style));
    }
    ctx.indent();

    match &block.body {
        BlockBody::Header(header) => {
            ctx.add_line(&format!("<h1>{}</h1>", escape_html(&header.title)));
            ctx.add_line(&format!(
                "<p class=\"subtitle\">{}</p>",
                escape_html(&header.subtitle)
            ));
            ctx.add_line(&format!(
                "<p class=\"issue-line\">{} · {}</p>",
                escape_html(&header.issue_number),
                escape_html(&header.issue_date)
            ));
            if !header.tagline.is_empty() {
                ctx.add_line(&format!(
                    "<p class=\"tagline\">{}</p>",
                    escape_html(&header.tagline)
                ));
            }
        }

        BlockBody::Ticker(ticker) => {
            ctx.add_line("<div class=\"ticker-inner\">");
            ctx.indent();
            for item in &ticker.items {
                ctx.add_line(&format!(
                    "<span class=\"ticker-item\">{}</span>",
                    escape_html(item)
                ));
            }
            ctx.dedent();
            ctx.add_line("</div>");
        }

        BlockBody::SectionDivider(divider) => {
            let style_class = match divider.style {
                DividerStyle::Line => "divider-line",
                DividerStyle::Gradient => "divider-gradient",
                DividerStyle::Icon => "divider-icon",
            };
            ctx.add_line(&format!(
                "<div class=\"divider {}\"><span>{}</span></div>",
                style_class,
                escape_html(&divider.label)
            ));
        }

        BlockBody::ArticleGrid(grid) => {
            ctx.add_line(&format!("<h2>{}</h2>", escape_html(&grid.section_title)));
            ctx.add_line(&format!(
                "<div class=\"article-grid cols-{}\">",
                grid.columns
            ));
            ctx.indent();
            for article in &grid.articles {
                ctx.add_line("<article>");
                ctx.indent();
                if article.url.is_empty() {
                    ctx.add_line(&format!("<h3>{}</h3>", escape_html(&article.title)));
                } else {
                    ctx.add_line(&format!(
                        "<h3><a href=\"{}\">{}</a></h3>",
                        escape_html(&article.url),
                        escape_html(&article.title)
                    ));
                }
                ctx.add_line(&format!(
                    "<p class=\"source\">{}</p>",
                    escape_html(&article.source)
                ));
                if let Some(url) = article.image_url.as_deref().filter(|u| !u.is_empty()) {
                    ctx.add_line(&format!(
                        "<img src=\"{}\" alt=\"{}\" />",
                        escape_html(url),
                        escape_html(&article.title)
                    ));
                }
                ctx.add_line(&format!("<p>{}</p>", escape_html(&article.summary)));
                ctx.add_line(&format!(
                    "<blockquote class=\"clinical-review\">{}</blockquote>",
                    escape_html(&article.clinical_review)
                ));
                ctx.add_line(&format!(
                    "<p class=\"my-view\">{}</p>",
                    escape_html(&article.my_view)
                ));
                ctx.add_line(&format!(
                    "<span class=\"evidence\">{}</span>",
                    evidence_label(article.evidence_level)
                ));
                if !article.comments.is_empty() {
                    ctx.add_line("<ul class=\"comments\">");
                    ctx.indent();
                    for comment in &article.comments {
                        ctx.add_line(&format!(
                            "<li><strong>{}</strong> ({}): {}</li>",
                            escape_html(&comment.author),
                            escape_html(&comment.role),
                            escape_html(&comment.text)
                        ));
                    }
                    ctx.dedent();
                    ctx.add_line("</ul>");
                }
                ctx.dedent();
                ctx.add_line("</article>");
            }
            ctx.dedent();
            ctx.add_line("</div>");
        }

        BlockBody::Spotlight(spot) => {
            if spot.url.is_empty() {
                ctx.add_line(&format!("<h2>{}</h2>", escape_html(&spot.title)));
            } else {
                ctx.add_line(&format!(
                    "<h2><a href=\"{}\">{}</a></h2>",
                    escape_html(&spot.url),
                    escape_html(&spot.title)
                ));
            }
            ctx.add_line(&format!(
                "<p class=\"source\">{}</p>",
                escape_html(&spot.source)
            ));
            if let Some(url) = spot.image_url.as_deref().filter(|u| !u.is_empty()) {
                ctx.add_line(&format!(
                    "<img src=\"{}\" alt=\"{}\" />",
                    escape_html(url),
                    escape_html(&spot.title)
                ));
            }
            ctx.add_line(&format!("<p>{}</p>", escape_html(&spot.summary)));
            ctx.add_line(&format!(
                "<blockquote class=\"clinical-review\">{}</blockquote>",
                escape_html(&spot.clinical_review)
            ));
            ctx.add_line(&format!(
                "<p class=\"my-view\">{}</p>",
                escape_html(&spot.my_view)
            ));
            ctx.add_line(&format!(
                "<span class=\"evidence\">{}</span>",
                evidence_label(spot.evidence_level)
            ));
        }

        BlockBody::EthicsSplit(ethics) => {
            ctx.add_line(&format!("<h3>{}</h3>", escape_html(&ethics.topic)));
            ctx.add_line(&format!(
                "<div class=\"ethics-issue\">{}</div>",
                escape_html(&ethics.issue)
            ));
            ctx.add_line(&format!(
                "<div class=\"ethics-view\">{}</div>",
                escape_html(&ethics.my_view)
            ));
        }

        BlockBody::Image(image) => {
            let align = match image.alignment {
                Alignment::Left => "align-left",
                Alignment::Center => "align-center",
                Alignment::Right => "align-right",
            };
            ctx.add_line(&format!("<figure class=\"{}\">", align));
            ctx.indent();
            ctx.add_line(&format!(
                "<img src=\"{}\" alt=\"{}\" />",
                escape_html(&image.image_url),
                escape_html(&image.alt_text)
            ));
            let caption = match image.credit.as_deref().filter(|c| !c.is_empty()) {
                Some(credit) => format!(
                    "{} <span class=\"credit\">{}</span>",
                    escape_html(&image.caption),
                    escape_html(credit)
                ),
                None => escape_html(&image.caption),
            };
            ctx.add_line(&format!("<figcaption>{}</figcaption>", caption));
            ctx.dedent();
            ctx.add_line("</figure>");
        }

        BlockBody::Text(text) => {
            if let Some(heading) = text.heading.as_deref().filter(|h| !h.is_empty()) {
                ctx.add_line(&format!("<h3>{}</h3>", escape_html(heading)));
            }
            // Free-text content is produced by the rich-text editing
            // surface as HTML and passes through unescaped
            ctx.add_line(&format!("<div class=\"text-content\">{}</div>", text.content));
        }

        BlockBody::PromptMasterclass(prompt) => {
            ctx.add_line(&format!("<h3>{}</h3>", escape_html(&prompt.title)));
            ctx.add_line(&format!(
                "<pre class=\"prompt\">{}</pre>",
                escape_html(&prompt.prompt)
            ));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&prompt.explanation)));
            ctx.add_line(&format!(
                "<p class=\"use-case\">{}</p>",
                escape_html(&prompt.use_case)
            ));
        }

        BlockBody::SbarPrompt(sbar) => {
            ctx.add_line(&format!("<h3>{}</h3>", escape_html(&sbar.title)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&sbar.intro)));
            if !sbar.steps.is_empty() {
                ctx.add_line("<ol class=\"sbar-steps\">");
                ctx.indent();
                for step in &sbar.steps {
                    ctx.add_line(&format!(
                        "<li><strong>{} — {}</strong>: {} <em>{}</em></li>",
                        escape_html(&step.letter),
                        escape_html(&step.name),
                        escape_html(&step.description),
                        escape_html(&step.example)
                    ));
                }
                ctx.dedent();
                ctx.add_line("</ol>");
            }
            if !sbar.prompt_template.is_empty() {
                ctx.add_line(&format!(
                    "<pre class=\"prompt-template\">{}</pre>",
                    escape_html(&sbar.prompt_template)
                ));
            }
            if !sbar.safety_notes.is_empty() {
                ctx.add_line("<ul class=\"safety-notes\">");
                ctx.indent();
                for note in &sbar.safety_notes {
                    ctx.add_line(&format!("<li>{}</li>", escape_html(note)));
                }
                ctx.dedent();
                ctx.add_line("</ul>");
            }
        }

        BlockBody::TermOfMonth(term) => {
            ctx.add_line(&format!("<h3>{}</h3>", escape_html(&term.term)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&term.definition)));
            ctx.add_line(&format!(
                "<p class=\"clinical-context\">{}</p>",
                escape_html(&term.clinical_context)
            ));
        }

        BlockBody::History(history) => {
            ctx.add_line(&format!(
                "<span class=\"year\">{}</span>",
                escape_html(&history.year)
            ));
            ctx.add_line(&format!("<h3>{}</h3>", escape_html(&history.title)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&history.content)));
        }

        BlockBody::Humor(humor) => {
            ctx.add_line(&format!("<h3>{}</h3>", escape_html(&humor.heading)));
            ctx.add_line(&format!("<p>{}</p>", escape_html(&humor.content)));
            if let Some(attribution) = humor.attribution.as_deref().filter(|a| !a.is_empty()) {
                ctx.add_line(&format!(
                    "<p class=\"attribution\">{}</p>",
                    escape_html(attribution)
                ));
            }
        }

        BlockBody::Spacer(spacer) => {
            ctx.add_line(&format!(
                "<div class=\"spacer\" style=\"height: {}px\"></div>",
                spacer.height
            ));
        }

        BlockBody::Footer(footer) => {
            ctx.add_line(&format!(
                "<p class=\"institution\">{} · {}</p>",
                escape_html(&footer.institution),
                escape_html(&footer.department)
            ));
            if !footer.contributors.is_empty() {
                ctx.add_line("<ul class=\"contributors\">");
                ctx.indent();
                for contributor in &footer.contributors {
                    ctx.add_line(&format!(
                        "<li>{} — {}</li>",
                        escape_html(&contributor.name),
                        escape_html(&contributor.role)
                    ));
                }
                ctx.dedent();
                ctx.add_line("</ul>");
            }
            if let Some(email) = footer.contact_email.as_deref().filter(|e| !e.is_empty()) {
                ctx.add_line(&format!(
                    "<p class=\"contact\"><a href=\"mailto:{0}\">{0}</a></p>",
                    escape_html(email)
                ));
            }
            ctx.add_line(&format!(
                "<p class=\"links\"><a href=\"{}\">Website</a> · <a href=\"{}\">Unsubscribe</a></p>",
                escape_html(&footer.website_url),
                escape_html(&footer.unsubscribe_url)
            ));
            if !footer.disclaimer.is_empty() {
                ctx.add_line(&format!(
                    "<p class=\"disclaimer\">{}</p>",
                    escape_html(&footer.disclaimer)
                ));
            }
            ctx.add_line(&format!(
                "<p class=\"copyright\">© {} {}</p>",
                escape_html(&footer.copyright_year),
                escape_html(&footer.institution)
            ));
        }
    }

    ctx.dedent();
    ctx.add_line("</div>");
}

fn inline_style(block: &Block) -> String {
    let mut parts: Vec<String> = Vec::new();
    let style = &block.style;
    if let Some(color) = &style.block_bg_color {
        parts.push(format!("background-color: {}", escape_html(color)));
    }
    if let Some(color) = &style.block_text_color {
        parts.push(format!("color: {}", escape_html(color)));
    }
    if let Some(padding) = style.block_padding {
        parts.push(format!("padding-top: {0}px; padding-bottom: {0}px", padding));
    }
    if let Some(size) = style.block_font_size {
        parts.push(format!("font-size: {}px", size));
    }
    if let Some(width) = style.block_width {
        let pct = match width {
            newsforge_model::BlockWidth::Quarter => 25,
            newsforge_model::BlockWidth::Half => 50,
            newsforge_model::BlockWidth::ThreeQuarters => 75,
            newsforge_model::BlockWidth::Full => 100,
        };
        parts.push(format!("width: {}%", pct));
    }
    parts.join("; ")
}

fn evidence_label(level: newsforge_model::EvidenceLevel) -> &'static str {
    match level {
        newsforge_model::EvidenceLevel::High => "High",
        newsforge_model::EvidenceLevel::Moderate => "Moderate",
        newsforge_model::EvidenceLevel::Low => "Low",
        newsforge_model::EvidenceLevel::ExpertOpinion => "Expert Opinion",
    }
}

fn theme_css(theme: &Theme) -> String {
    format!(
        ":root {{\n  --color-primary: {};\n  --color-accent: {};\n  --color-bg: {};\n  --color-surface: {};\n  --color-text: {};\n  --color-muted: {};\n  --font-body: {};\n  --font-heading: {};\n  --font-mono: 'IBM Plex Mono', monospace;\n}}\n",
        theme.primary_color,
        theme.accent_color,
        theme.background_color,
        theme.surface_color,
        theme.text_color,
        theme.muted_color,
        theme.font_family,
        theme.heading_family
    )
}

const BASE_CSS: &str = "\
* { box-sizing: border-box; }
body {
  margin: 0;
  background: var(--color-bg);
  color: var(--color-text);
  font-family: var(--font-body);
  -webkit-font-smoothing: antialiased;
}
h1, h2, h3 { font-family: var(--font-heading); }
a { color: var(--color-accent); }
.newsletter-preview { max-width: 860px; margin: 0 auto; }
.newsletter-row { display: grid; gap: 16px; }
.row-1col { grid-template-columns: 1fr; }
.row-2col { grid-template-columns: 1fr 1fr; }
.row-3col { grid-template-columns: 1fr 1fr 1fr; }
.row-2x2 { grid-template-columns: 1fr 1fr; }
.block { background: var(--color-surface); padding: 16px; }
.block-ticker { overflow: hidden; white-space: nowrap; }
.ticker-item { margin-right: 32px; }
.ticker-inner { display: inline-block; animation: ticker-scroll 30s linear infinite; }
@keyframes ticker-scroll {
  0% { transform: translateX(0); }
  100% { transform: translateX(-50%); }
}
.divider span { color: var(--color-primary); font-weight: 600; letter-spacing: 0.1em; }
.divider-gradient { border-bottom: 3px solid; border-image: linear-gradient(90deg, var(--color-primary), var(--color-accent)) 1; }
.divider-line { border-bottom: 1px solid var(--color-muted); }
.article-grid { display: grid; gap: 16px; }
.article-grid.cols-1 { grid-template-columns: 1fr; }
.article-grid.cols-2 { grid-template-columns: 1fr 1fr; }
.article-grid.cols-3 { grid-template-columns: 1fr 1fr 1fr; }
.article-grid img, .block-spotlight img, figure img { max-width: 100%; }
.source { color: var(--color-muted); font-size: 0.85em; }
.clinical-review { border-left: 3px solid var(--color-accent); margin: 8px 0; padding-left: 12px; }
.evidence { background: var(--color-primary); color: #fff; padding: 2px 8px; border-radius: 4px; font-size: 0.8em; }
.prompt, .prompt-template { font-family: var(--font-mono); background: var(--color-bg); padding: 12px; white-space: pre-wrap; }
.block-footer { text-align: center; color: var(--color-muted); font-size: 0.9em; }
figure.align-left { text-align: left; }
figure.align-center { text-align: center; }
figure.align-right { text-align: right; }
";

const PRINT_CSS: &str = "\
@page {
  size: A4;
  margin: 12mm 14mm;
}
@media print {
  html, body {
    width: 210mm;
    print-color-adjust: exact;
    -webkit-print-color-adjust: exact;
  }
  .newsletter-preview { max-width: 100%; box-shadow: none !important; }
  .block-ticker { overflow: hidden; }
  .ticker-inner { animation: none !important; }
  a { color: inherit; text-decoration: none; }
}
";

// Print fires only once fonts and every image have settled; a load
// failure counts as settled so a broken image cannot stall the dialog.
const PRINT_TRIGGER_SCRIPT: &str = "\
<script>
(function () {
  var images = Array.prototype.slice.call(document.images);
  var pending = images.filter(function (img) { return !img.complete; });
  var imagesReady = Promise.all(pending.map(function (img) {
    return new Promise(function (resolve) {
      img.addEventListener('load', resolve);
      img.addEventListener('error', resolve);
    });
  }));
  var fontsReady = document.fonts ? document.fonts.ready : Promise.resolve();
  Promise.all([imagesReady, fontsReady]).then(function () {
    window.focus();
    window.print();
  });
})();
</script>
";

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
