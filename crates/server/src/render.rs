//! HTML pages for the ledger and the advice view.
//!
//! Every user-provided string goes through [`escape`].

use std::fmt::Write as _;

use engine::{Entry, Totals};

const HEAD: &str = "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Tax Ledger</title></head>\n<body>\n";
const FOOT: &str = "</body>\n</html>\n";

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// The list page: submit form, entry table with delete buttons, totals.
pub fn home(entries: &[Entry], totals: &Totals) -> String {
    let mut html = String::from(HEAD);
    html.push_str("<h1>Tax Ledger</h1>\n");
    html.push_str(concat!(
        "<form method=\"post\" action=\"/submit/\">\n",
        "<label>Income <input type=\"number\" step=\"0.01\" min=\"0\" name=\"income\" required></label>\n",
        "<label>Expenses <input type=\"number\" step=\"0.01\" min=\"0\" name=\"expenses\" required></label>\n",
        "<label>Tax Rate <input type=\"number\" step=\"0.01\" name=\"tax_rate\" value=\"24\"></label>\n",
        "<label>Description <input type=\"text\" name=\"description\"></label>\n",
        "<button type=\"submit\">Submit</button>\n",
        "</form>\n",
    ));

    html.push_str("<table>\n<tr><th>ID</th><th>Income</th><th>Expenses</th><th>Tax Rate</th><th>Tax Amount</th><th>Description</th><th></th></tr>\n");
    for entry in entries {
        let _ = writeln!(
            html,
            "<tr><td>{id}</td><td>{:.2}</td><td>{:.2}</td><td>{}%</td><td>{:.2}</td><td>{}</td>\
             <td><form method=\"post\" action=\"/delete/{id}\"><button type=\"submit\">Delete</button></form></td></tr>",
            entry.income,
            entry.expenses,
            entry.tax_rate,
            entry.tax_amount,
            escape(entry.description.as_deref().unwrap_or("")),
            id = entry.id,
        );
    }
    html.push_str("</table>\n");

    let _ = writeln!(
        html,
        "<p>Total Income: {:.2}</p>\n<p>Total Expenses: {:.2}</p>\n<p>Total Tax: {:.2}</p>",
        totals.total_income, totals.total_expenses, totals.total_tax
    );

    html.push_str("<form method=\"post\" action=\"/clear_all/\"><button type=\"submit\">Clear All</button></form>\n");
    html.push_str("<p><a href=\"/get_all_advice/\">Get Tax Advice</a></p>\n");
    html.push_str(FOOT);
    html
}

/// The advice page: one list item per advice line.
pub fn advice(lines: &[String]) -> String {
    let mut html = String::from(HEAD);
    html.push_str("<h1>Tax Advice</h1>\n<ul>\n");
    for line in lines {
        let _ = writeln!(html, "<li>{}</li>", escape(line));
    }
    html.push_str("</ul>\n<p><a href=\"/\">Back</a></p>\n");
    html.push_str(FOOT);
    html
}
