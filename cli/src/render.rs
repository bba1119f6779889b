//! Plain-text renderings of a rubric document.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use rubric::i18n::{level_label, metric_label, subtitle_label, translate};
use rubric::number::format_percent;
use rubric::stars::{Star, star_rating};
use rubric::{Document, Language, LocalizedText};

fn score_text(score: Option<f64>) -> String {
    score.map_or_else(|| "--".to_owned(), format_percent)
}

fn weight_text(weight: f64) -> String {
    format!("{weight:.0}%")
}

fn text_or_key(lang: Language, text: &LocalizedText, key: &str) -> String {
    if text.is_empty() {
        translate(lang, key).to_owned()
    } else {
        text.resolve(lang).to_owned()
    }
}

/// `★★½☆☆` for a 0–100 support value.
pub fn stars_text(support: f64) -> String {
    star_rating(support)
        .iter()
        .map(|star| match star {
            Star::Full => '★',
            Star::Half => '½',
            Star::Empty => '☆',
        })
        .collect()
}

/// Header, overall score, and one block per level listing its metrics.
pub fn summary(doc: &Document, lang: Language) -> String {
    let mut lines = vec![
        text_or_key(lang, &doc.name, "site.title"),
        text_or_key(lang, &doc.description, "site.description"),
        String::new(),
        format!("{}: {}", translate(lang, "overall.score"), score_text(doc.overall_score())),
    ];

    for (level, weight) in doc.levels.iter().zip(doc.level_weights()) {
        lines.push(String::new());
        lines.push(format!(
            "{}  {} {}  {} {}",
            level_label(lang, &level.title),
            translate(lang, "weight"),
            weight_text(weight),
            translate(lang, "score"),
            score_text(level.score()),
        ));
        let subtitle = subtitle_label(lang, &level.title, &level.subtitle);
        if !subtitle.is_empty() {
            lines.push(format!("  {subtitle}"));
        }
        if !level.core_question.is_empty() {
            lines.push(format!(
                "  {}: {}",
                translate(lang, "core.question"),
                level.core_question.resolve(lang)
            ));
        }
        for (metric, weight) in level.metrics.iter().zip(level.metric_weights()) {
            lines.push(format!(
                "  - {} ({}) {}",
                metric_label(lang, &metric.id, &metric.name),
                weight_text(weight),
                score_text(metric.score()),
            ));
        }
    }

    let footer: Vec<String> = [("version", &doc.version), ("author", &doc.author), ("license", &doc.license)]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| format!("{}: {}", translate(lang, key), value.trim()))
        .collect();
    if !footer.is_empty() {
        lines.push(String::new());
        lines.push(footer.join("  "));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Every paper, grouped under `level / metric` headings.
pub fn papers(doc: &Document, lang: Language) -> String {
    let mut lines = Vec::new();
    for level in &doc.levels {
        let level_name = level_label(lang, &level.title);
        for metric in level.metrics.iter().filter(|m| !m.papers.is_empty()) {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("{level_name} / {}", metric_label(lang, &metric.id, &metric.name)));
            for paper in &metric.papers {
                let support = paper.support_score();
                lines.push(format!(
                    "  {} {}  {}",
                    stars_text(support.unwrap_or(0.0)),
                    score_text(support),
                    paper.title.resolve(lang),
                ));
                if !paper.url.is_empty() {
                    lines.push(format!("      {}", paper.url));
                }
                if !paper.core_argument.is_empty() {
                    lines.push(format!(
                        "      {}: {}",
                        translate(lang, "core.argument"),
                        paper.core_argument.resolve(lang)
                    ));
                }
                if !paper.notes.is_empty() {
                    lines.push(format!("      {}: {}", translate(lang, "notes"), paper.notes.resolve(lang)));
                }
            }
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
