//! In-memory page search.
//!
//! A static table of page descriptors filtered by case-insensitive substring
//! match over title and description. No ranking, no tokenization.

use crate::types::Href;

#[derive(Debug, Clone, PartialEq)]
pub struct PageDescriptor {
    pub title: String,
    pub href: Href,
    pub description: String,
}

impl PageDescriptor {
    pub fn new(
        title: impl Into<String>,
        href: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            href: Href::new(href),
            description: description.into(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

pub struct SearchIndex {
    pages: Vec<PageDescriptor>,
}

impl SearchIndex {
    pub fn new(pages: Vec<PageDescriptor>) -> Self {
        Self { pages }
    }

    /// The site's built-in page table.
    pub fn site_default() -> Self {
        Self::new(vec![
            PageDescriptor::new(
                "快速开始",
                "./pages/getting-started.html",
                "安装、配置与第一个页面",
            ),
            PageDescriptor::new(
                "API 参考",
                "./pages/api-reference.html",
                "REST 接口、参数与返回值说明",
            ),
            PageDescriptor::new("常见问题", "./pages/faq.html", "部署与使用中的常见问题解答"),
            PageDescriptor::new("插件使用指南", "./pages/plugin.html", "浏览器插件安装和使用说明"),
        ])
    }

    /// Pages whose title or description contains `query`, case-insensitively.
    /// A blank query clears rather than matching everything. The query is
    /// matched as typed, surrounding whitespace included.
    pub fn search(&self, query: &str) -> Vec<&PageDescriptor> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.pages.iter().filter(|page| page.matches(&needle)).collect()
    }
}

#[cfg(test)]
mod tests;
