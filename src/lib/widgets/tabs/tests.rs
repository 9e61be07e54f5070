use super::*;
use crate::dom::Document;

fn example() -> Document {
    Document::parse(
        "<div class=\"code-example\">\
         <button class=\"code-tab active\">curl</button>\
         <button class=\"code-tab\">python</button>\
         <button class=\"code-tab\">rust</button>\
         <div class=\"code-content\">curl body</div>\
         <div class=\"code-content\" style=\"display: none\">python body</div>\
         <div class=\"code-content\" style=\"display: none\">rust body</div>\
         </div>",
    )
}

fn active_tabs(doc: &Document) -> Vec<String> {
    let root = doc.root();
    doc.elements_with_class(root, "code-tab")
        .into_iter()
        .filter(|&tab| doc.has_class(tab, "active"))
        .map(|tab| doc.text_content(tab))
        .collect()
}

fn visible_contents(doc: &Document) -> Vec<String> {
    let root = doc.root();
    doc.elements_with_class(root, "code-content")
        .into_iter()
        .filter(|&pane| doc.style_prop(pane, "display").as_deref() != Some("none"))
        .map(|pane| doc.text_content(pane))
        .collect()
}

#[test]
fn switching_leaves_one_tab_and_one_pane_active() {
    let mut doc = example();
    let root = doc.root();
    let container = doc.elements_with_class(root, "code-example")[0];
    let switcher = TabSwitcher::new(&doc, container);

    switcher.switch_tab(&mut doc, 1);
    assert_eq!(active_tabs(&doc), vec!["python"]);
    assert_eq!(visible_contents(&doc), vec!["python body"]);

    switcher.switch_tab(&mut doc, 2);
    assert_eq!(active_tabs(&doc), vec!["rust"]);
    assert_eq!(visible_contents(&doc), vec!["rust body"]);
}

#[test]
fn out_of_range_index_changes_nothing() {
    let mut doc = example();
    let root = doc.root();
    let container = doc.elements_with_class(root, "code-example")[0];
    let switcher = TabSwitcher::new(&doc, container);

    let before = doc.inner_html(root);
    switcher.switch_tab(&mut doc, 3);
    assert_eq!(doc.inner_html(root), before);
}

#[test]
fn tab_without_a_pane_hides_everything() {
    let mut doc = Document::parse(
        "<div class=\"code-example\">\
         <button class=\"code-tab\">one</button>\
         <button class=\"code-tab\">two</button>\
         <div class=\"code-content\">only pane</div>\
         </div>",
    );
    let root = doc.root();
    let container = doc.elements_with_class(root, "code-example")[0];
    let switcher = TabSwitcher::new(&doc, container);

    switcher.switch_tab(&mut doc, 1);
    assert_eq!(active_tabs(&doc), vec!["two"]);
    assert!(visible_contents(&doc).is_empty());
}

#[test]
fn switchers_are_scoped_to_their_container() {
    let mut doc = Document::parse(
        "<div class=\"code-example\">\
         <button class=\"code-tab\">a1</button>\
         <div class=\"code-content\">pane a</div>\
         </div>\
         <div class=\"code-example\">\
         <button class=\"code-tab active\">b1</button>\
         <div class=\"code-content\">pane b</div>\
         </div>",
    );
    let switchers = switchers_for_page(&doc);
    assert_eq!(switchers.len(), 2);
    assert_eq!(switchers[0].tab_count(), 1);

    switchers[0].switch_tab(&mut doc, 0);
    assert_eq!(active_tabs(&doc), vec!["a1", "b1"]);
}
