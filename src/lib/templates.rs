use std::path::Path;

use crate::config;
use crate::utils::{escape_text, prefix_to_root};

/// HTML shell for rendered Markdown pages. It carries the containers the
/// enhancement passes fill in: the breadcrumb nav, the TOC aside and the
/// `doc-content` main that headings are collected from.
pub fn page_shell(title: &str, rel_out: &Path, body: &str) -> String {
    let prefix = prefix_to_root(rel_out);
    let title = escape_text(title);
    let site = config::SITE_TITLE;
    let lang = config::SITE_LANG;
    format!(
        r#"<!doctype html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · {site}</title>
<link rel="stylesheet" href="{prefix}style.css">
</head>
<body>
<header class="header">
<nav id="nav-menu" class="nav-menu"></nav>
<div class="lang-switcher"><span id="current-lang">中文</span></div>
</header>
<nav class="breadcrumb"></nav>
<div class="page-layout">
<aside class="toc"></aside>
<main class="doc-content">
{body}
</main>
</div>
<button id="back-to-top" aria-label="返回顶部">↑</button>
</body>
</html>
"#
    )
}
