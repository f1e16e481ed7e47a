//! Small string builders for the two pages. No templating engine; every
//! user-supplied value goes through [`escape`].

use crate::application::DashboardReport;
use crate::domain::{format_dollars, Summary};

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 320.0;
const CHART_MARGIN: f64 = 40.0;

/// Message shown above the page content after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", escape(title)));
    page.push_str("</head>\n<body>\n");
    page.push_str(body);
    page.push_str("</body>\n</html>\n");
    page
}

fn notice_html(notice: Option<&Notice>) -> String {
    match notice {
        Some(Notice::Info(msg)) => format!("<p class=\"notice\">{}</p>\n", escape(msg)),
        Some(Notice::Error(msg)) => format!("<p class=\"error\">{}</p>\n", escape(msg)),
        None => String::new(),
    }
}

/// The summary as an HTML fragment, one `<br>`-terminated line per entry.
pub fn summary_fragment(summary: &Summary) -> String {
    let mut out = String::from("Expense Tracker:<br>");
    for line in &summary.lines {
        out.push_str(&format!(
            "{}: {}<br>",
            escape(&line.category),
            format_dollars(line.amount)
        ));
    }
    out.push_str(&format!("Total: {}<br>", format_dollars(summary.total)));
    out
}

pub fn index_page(summary: &Summary, notice: Option<&Notice>) -> String {
    let mut body = String::from("<h1>Expense Tracker</h1>\n");
    body.push_str(&notice_html(notice));
    body.push_str("<form method=\"post\" action=\"/\">\n");
    body.push_str("<label>Category: <input type=\"text\" name=\"category\" required></label>\n");
    body.push_str("<label>Amount: ");
    body.push_str("<input type=\"text\" name=\"amount\" inputmode=\"decimal\" required></label>\n");
    body.push_str("<input type=\"submit\" name=\"action\" value=\"Add\">\n");
    body.push_str("<input type=\"submit\" name=\"action\" value=\"Remove\">\n");
    body.push_str("</form>\n");
    body.push_str(&format!("<div id=\"expenses\">{}</div>\n", summary_fragment(summary)));
    body.push_str("<p><a href=\"/dashboard/\">Dashboard</a></p>\n");
    layout("Expense Tracker", &body)
}

/// Inline SVG bar chart, scaled to the largest positive bar.
pub fn bar_chart_svg(report: &DashboardReport) -> String {
    let chart = &report.chart;
    let plot_width = CHART_WIDTH - 2.0 * CHART_MARGIN;
    let plot_height = CHART_HEIGHT - 2.0 * CHART_MARGIN;
    let baseline = CHART_HEIGHT - CHART_MARGIN;
    let max = report.max_amount();

    let mut svg = format!(
        "<svg id=\"bar-chart\" xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
        CHART_WIDTH,
        CHART_HEIGHT
    );
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"20\" text-anchor=\"middle\">{}</text>\n",
        CHART_WIDTH / 2.0,
        escape(&chart.title)
    ));
    svg.push_str(&format!(
        "<line x1=\"{}\" y1=\"{baseline}\" x2=\"{}\" y2=\"{baseline}\" stroke=\"black\"/>\n",
        CHART_MARGIN,
        CHART_WIDTH - CHART_MARGIN
    ));

    if !chart.bars.is_empty() {
        let slot = plot_width / chart.bars.len() as f64;
        for (i, bar) in chart.bars.iter().enumerate() {
            let height = if max > 0 && bar.amount > 0 {
                bar.amount as f64 / max as f64 * plot_height
            } else {
                0.0
            };
            let x = CHART_MARGIN + slot * i as f64 + slot * 0.1;
            svg.push_str(&format!(
                "<rect x=\"{x:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{height:.1}\"",
                baseline - height,
                slot * 0.8
            ));
            svg.push_str(" fill=\"steelblue\">");
            svg.push_str(&format!(
                "<title>{}: {}</title></rect>\n",
                escape(&bar.category),
                format_dollars(bar.amount)
            ));
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{}\" text-anchor=\"middle\">{}</text>\n",
                x + slot * 0.4,
                baseline + 15.0,
                escape(&bar.category)
            ));
        }
    }

    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>\n",
        CHART_WIDTH / 2.0,
        CHART_HEIGHT - 5.0,
        escape(&chart.x_label)
    ));
    let mid = CHART_HEIGHT / 2.0;
    svg.push_str(&format!(
        "<text x=\"12\" y=\"{mid}\" transform=\"rotate(-90 12 {mid})\" text-anchor=\"middle\">"
    ));
    svg.push_str(&format!("{}</text>\n", escape(&chart.y_label)));
    svg.push_str("</svg>\n");
    svg
}

pub fn table_html(report: &DashboardReport) -> String {
    let mut table = String::from("<table id=\"table\">\n");
    table.push_str("<tr><th>Category</th><th>Amount</th></tr>\n");
    for row in &report.rows {
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape(&row.category),
            escape(&row.formatted)
        ));
    }
    table.push_str("</table>\n");
    table
}

pub fn dashboard_page(report: &DashboardReport, notice: Option<&Notice>) -> String {
    let mut body = String::from("<h1>Expense Tracker Dashboard</h1>\n");
    body.push_str(&notice_html(notice));
    body.push_str("<div>\n<form method=\"post\">\n");
    body.push_str("<label>Category: ");
    body.push_str("<input id=\"category\" type=\"text\" name=\"category\" required></label>\n");
    body.push_str("<label>Amount: ");
    body.push_str(
        "<input id=\"amount\" type=\"number\" step=\"0.01\" name=\"amount\" required></label>\n",
    );
    body.push_str("<button id=\"update-button\" type=\"submit\" formaction=\"/dashboard/add\">");
    body.push_str("Add</button>\n");
    body.push_str("<button id=\"remove-button\" type=\"submit\" formaction=\"/dashboard/remove\">");
    body.push_str("Remove</button>\n");
    body.push_str("</form>\n</div>\n");
    body.push_str(&bar_chart_svg(report));
    body.push_str(&format!(
        "<div id=\"total-expense\">{}</div>\n",
        escape(&report.total_label)
    ));
    body.push_str(&table_html(report));
    body.push_str("<p><a href=\"/\">Form</a> | <a href=\"/export.csv\">CSV</a> | ");
    body.push_str("<a href=\"/export.json\">JSON</a></p>\n");
    layout("Expense Tracker Dashboard", &body)
}
