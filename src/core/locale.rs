// SymptomLens - core/locale.rs
//
// Fixed UI strings in each supported language.

use crate::core::model::Lang;

impl Lang {
    /// Selection summary placeholder when nothing is selected.
    pub fn none_placeholder(&self) -> &'static str {
        match self {
            Lang::En => "None",
            Lang::Zh => "暂无",
        }
    }

    /// Result area text while an analysis is in flight.
    pub fn analyzing(&self) -> &'static str {
        match self {
            Lang::En => "Analyzing...",
            Lang::Zh => "分析中…",
        }
    }

    /// Heading used when the analysis response carries no title.
    pub fn result_fallback_title(&self) -> &'static str {
        match self {
            Lang::En => "Result",
            Lang::Zh => "结果",
        }
    }

    /// Hint text shown while a region filter is active.
    pub fn region_hint(&self, region: &str) -> String {
        match self {
            Lang::En => format!("Region filter: {region}"),
            Lang::Zh => format!("部位筛选：{region}"),
        }
    }

    pub fn eight_principles_heading(&self) -> &'static str {
        match self {
            Lang::En => "Eight Principles",
            Lang::Zh => "八纲",
        }
    }

    pub fn interior_exterior_label(&self) -> &'static str {
        match self {
            Lang::En => "Exterior/Interior: ",
            Lang::Zh => "表里：",
        }
    }

    pub fn cold_heat_label(&self) -> &'static str {
        match self {
            Lang::En => "Cold/Heat: ",
            Lang::Zh => "寒热：",
        }
    }

    pub fn def_excess_label(&self) -> &'static str {
        match self {
            Lang::En => "Def/Excess: ",
            Lang::Zh => "虚实：",
        }
    }

    pub fn yin_yang_label(&self) -> &'static str {
        match self {
            Lang::En => "Yin/Yang: ",
            Lang::Zh => "阴阳：",
        }
    }

    pub fn evidence_heading(&self) -> &'static str {
        match self {
            Lang::En => "Evidence:",
            Lang::Zh => "证据：",
        }
    }

    // Panel chrome.

    pub fn symptoms_heading(&self) -> &'static str {
        match self {
            Lang::En => "Symptoms",
            Lang::Zh => "症状",
        }
    }

    pub fn selected_heading(&self) -> &'static str {
        match self {
            Lang::En => "Selected",
            Lang::Zh => "已选",
        }
    }

    pub fn body_map_heading(&self) -> &'static str {
        match self {
            Lang::En => "Body map",
            Lang::Zh => "部位",
        }
    }

    pub fn whole_body_label(&self) -> &'static str {
        match self {
            Lang::En => "Whole body",
            Lang::Zh => "全身",
        }
    }

    pub fn show_all_label(&self) -> &'static str {
        match self {
            Lang::En => "Show all",
            Lang::Zh => "显示全部",
        }
    }

    pub fn analyze_label(&self) -> &'static str {
        match self {
            Lang::En => "Analyze",
            Lang::Zh => "分析",
        }
    }

    pub fn clear_label(&self) -> &'static str {
        match self {
            Lang::En => "Clear",
            Lang::Zh => "清除",
        }
    }

    pub fn empty_catalog(&self) -> &'static str {
        match self {
            Lang::En => "No symptoms to show.",
            Lang::Zh => "没有可显示的症状。",
        }
    }
}
