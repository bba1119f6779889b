//! The two static UI dictionaries and language selection.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use serde::{Deserialize, Serialize};

use crate::text::LocalizedText;

/// Display language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    /// Two-letter code, as used in the URL suffix.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Parse a two-letter code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "zh" => Some(Self::Zh),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }

    /// Value for the `<html lang>` attribute.
    #[must_use]
    pub fn html_lang(self) -> &'static str {
        match self {
            Self::Zh => "zh-CN",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

const ZH: &[(&str, &str)] = &[
    ("site.title", "AI意识观察"),
    ("site.description", "AI意识的多层次评估框架"),
    ("overall.score", "总体评分"),
    ("overview.mode", "概览模式"),
    ("weight.proportions", "权重比例 • 悬停聚焦特定领域"),
    ("focused.view", "聚焦视图"),
    ("detailed.achievement", "显示该维度的详细成就水平"),
    ("level.philosophy", "哲学"),
    ("level.neuroscience", "神经科学"),
    ("level.psychology", "心理学"),
    ("level.cognitive.science", "认知科学"),
    ("subtitle.philosophy", "意识的本质与前提"),
    ("subtitle.neuroscience", "意识的计算基础"),
    ("subtitle.psychology", "意识的功能与行为"),
    ("score", "评分"),
    ("weight", "权重"),
    ("support.level", "支持度"),
    ("core.argument", "核心观点"),
    ("core.question", "核心问题"),
    ("notes", "备注"),
    ("papers", "支持论文"),
    ("read.paper", "阅读论文"),
    ("metric.phenomenal.consciousness", "现象意识 (Phenomenal Consciousness)"),
    ("metric.self.awareness", "自我意识 (Self-Awareness)"),
    ("metric.ethics.intentionality", "伦理与意向性 (Ethics & Intentionality)"),
    ("metric.information.integration", "整合信息论 (Information Integration Theory)"),
    ("metric.global.workspace", "全局工作空间理论 (Global Workspace Theory)"),
    ("metric.recurrent.processing", "循环处理理论 (Recurrent Processing Theory)"),
    ("metric.higher.order", "高阶理论 (Higher-order Theory)"),
    ("metric.theory.of.mind", "心智理论 (Theory of Mind, ToM)"),
    ("metric.agency.autonomy", "自主性 (Agency & Autonomy)"),
    ("metric.metacognition", "元认知与不确定性监控 (Metacognition & Uncertainty Monitoring)"),
    ("metric.situational.awareness", "情境意识 (Situational Awareness)"),
    ("metric.creativity", "创造性 (Creativity)"),
    ("version", "版本"),
    ("author", "作者"),
    ("license", "许可"),
    ("loading", "加载中..."),
    ("language.switch", "切换语言"),
    ("switch.to.english", "切换到英文"),
    ("switch.to.chinese", "切换到中文"),
];

const EN: &[(&str, &str)] = &[
    ("site.title", "AI Consciousness Watch"),
    ("site.description", "A multi-level evaluation framework for AI consciousness"),
    ("overall.score", "Overall Score"),
    ("overview.mode", "Overview Mode"),
    ("weight.proportions", "Weight proportions • Hover to focus on specific domain"),
    ("focused.view", "Focused View"),
    ("detailed.achievement", "Showing detailed achievement level for this dimension"),
    ("level.philosophy", "Philosophy"),
    ("level.neuroscience", "Neuroscience"),
    ("level.psychology", "Psychology"),
    ("level.cognitive.science", "Cognitive Science"),
    ("subtitle.philosophy", "The Nature and Prerequisites of Consciousness"),
    ("subtitle.neuroscience", "Computational Foundations of Consciousness"),
    ("subtitle.psychology", "Functions and Behaviors of Consciousness"),
    ("score", "Score"),
    ("weight", "Weight"),
    ("support.level", "Support Level"),
    ("core.argument", "Core Argument"),
    ("core.question", "Core Question"),
    ("notes", "Notes"),
    ("papers", "Supporting Papers"),
    ("read.paper", "Read paper"),
    ("metric.phenomenal.consciousness", "Phenomenal Consciousness"),
    ("metric.self.awareness", "Self-Awareness"),
    ("metric.ethics.intentionality", "Ethics & Intentionality"),
    ("metric.information.integration", "Information Integration Theory"),
    ("metric.global.workspace", "Global Workspace Theory"),
    ("metric.recurrent.processing", "Recurrent Processing Theory"),
    ("metric.higher.order", "Higher-order Theory"),
    ("metric.theory.of.mind", "Theory of Mind (ToM)"),
    ("metric.agency.autonomy", "Agency & Autonomy"),
    ("metric.metacognition", "Metacognition & Uncertainty Monitoring"),
    ("metric.situational.awareness", "Situational Awareness"),
    ("metric.creativity", "Creativity"),
    ("version", "Version"),
    ("author", "Author"),
    ("license", "License"),
    ("loading", "Loading..."),
    ("language.switch", "Switch Language"),
    ("switch.to.english", "Switch to English"),
    ("switch.to.chinese", "切换到中文"),
];

fn dictionary(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::Zh => ZH,
        Language::En => EN,
    }
}

fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    dictionary(lang).iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translate `key`, returning the key itself when it is unknown.
#[must_use]
pub fn translate(lang: Language, key: &str) -> &str {
    lookup(lang, key).unwrap_or(key)
}

/// Dotted dictionary slug: `"Self-Awareness"` → `"self.awareness"`.
#[must_use]
pub fn key_slug(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(".")
}

/// Bilingual text resolves directly; plain text is looked up under `prefix`.
fn dictionary_label(lang: Language, prefix: &str, text: &LocalizedText) -> String {
    if text.is_pair() {
        return text.resolve(lang).to_owned();
    }
    let plain = text.resolve(lang);
    let key = format!("{prefix}.{}", key_slug(plain));
    lookup(lang, &key).unwrap_or(plain).to_owned()
}

/// Display name of a level.
#[must_use]
pub fn level_label(lang: Language, title: &LocalizedText) -> String {
    dictionary_label(lang, "level", title)
}

/// Display name of a metric. Plain names are looked up by metric id first,
/// then by the name itself.
#[must_use]
pub fn metric_label(lang: Language, id: &str, name: &LocalizedText) -> String {
    if !name.is_pair() && !id.trim().is_empty() {
        if let Some(label) = lookup(lang, &format!("metric.{}", key_slug(id))) {
            return label.to_owned();
        }
    }
    dictionary_label(lang, "metric", name)
}

/// Subtitle of a level; plain revisions are keyed by the level title.
#[must_use]
pub fn subtitle_label(lang: Language, title: &LocalizedText, subtitle: &LocalizedText) -> String {
    if subtitle.is_pair() {
        return subtitle.resolve(lang).to_owned();
    }
    let key = format!("subtitle.{}", key_slug(title.resolve(Language::En)));
    lookup(lang, &key)
        .unwrap_or_else(|| subtitle.resolve(lang))
        .to_owned()
}
