// src/tables.rs
//
// Generic wiki-table reader: every score table on a page, each tied to the
// nearest preceding section headline. Specs decide what the columns mean.

use scraper::{ElementRef, Html, Selector};

use crate::sanitize::{normalize_ws, strip_brackets};

pub struct PageTable {
    /// Text of the nearest preceding h2/h3 headline; empty for leading tables.
    pub heading: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn parse_tables(html: &str) -> Vec<PageTable> {
    let doc = Html::parse_document(html);
    let flow_sel = Selector::parse("h2, h3, table.wikitable, table.article-table").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let cell_sel = Selector::parse("td, th").unwrap();
    let th_sel = Selector::parse("th").unwrap();

    let mut out = Vec::new();
    let mut heading = String::new();

    for el in doc.select(&flow_sel) {
        match el.value().name() {
            "h2" | "h3" => heading = headline_text(&el),
            _ => {
                let mut headers: Vec<String> = Vec::new();
                let mut rows: Vec<Vec<String>> = Vec::new();
                for tr in el.select(&tr_sel) {
                    let cells: Vec<String> = tr
                        .select(&cell_sel)
                        .map(|c| normalize_ws(&strip_brackets(&c.text().collect::<String>())))
                        .collect();
                    if cells.is_empty() {
                        continue;
                    }
                    let all_th = tr.select(&th_sel).count() == cells.len();
                    if all_th && headers.is_empty() && rows.is_empty() {
                        headers = cells;
                    } else {
                        rows.push(cells);
                    }
                }
                out.push(PageTable { heading: heading.clone(), headers, rows });
            }
        }
    }
    out
}

fn headline_text(el: &ElementRef) -> String {
    let text: String = el.text().collect();
    normalize_ws(&text.replace("[edit]", ""))
}
