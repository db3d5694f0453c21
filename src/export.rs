//! Report Export
//!
//! CSV text is assembled here and handed to the browser as a download.
//! PDF rendering is delegated to the page's `jspdf` global (with the
//! autotable plugin) once headers and rows are assembled.

use gloo_timers::callback::Timeout;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::format;
use crate::models::{AssignedItem, InventoryItem};

const REVOKE_DELAY_MILLIS: u32 = 1_000;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF library is not loaded")]
    PdfUnavailable,
    #[error("browser refused the download: {0}")]
    Browser(String),
}

fn browser_err(e: JsValue) -> ExportError {
    ExportError::Browser(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// One exported column: header text plus a cell formatter
pub struct Column<T> {
    pub header: &'static str,
    pub value: fn(&T) -> String,
}

fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Header line, then one line per row, CRLF separated
pub fn to_csv<T>(columns: &[Column<T>], rows: &[T]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|c| escape_csv(c.header))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            columns
                .iter()
                .map(|c| escape_csv(&(c.value)(row)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

/// `stem-YYYY-MM-DD.ext`
pub fn dated_filename(stem: &str, date_iso: &str, ext: &str) -> String {
    format!("{}-{}.{}", stem, date_iso, ext)
}

fn table_cells<T>(columns: &[Column<T>], rows: &[T]) -> (Vec<&'static str>, Vec<Vec<String>>) {
    let head = columns.iter().map(|c| c.header).collect();
    let body = rows
        .iter()
        .map(|row| columns.iter().map(|c| (c.value)(row)).collect())
        .collect();
    (head, body)
}

/// Trigger a browser download of `blob` under `filename`
pub fn save_blob(blob: &web_sys::Blob, filename: &str) -> Result<(), ExportError> {
    let window = web_sys::window().ok_or_else(|| ExportError::Browser("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Browser("no document".to_string()))?;
    let url = web_sys::Url::create_object_url_with_blob(blob).map_err(browser_err)?;

    let anchor = document
        .create_element("a")
        .map_err(browser_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Browser("anchor element".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| ExportError::Browser("no body".to_string()))?;
    body.append_child(&anchor).map_err(browser_err)?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    // The download must start before its URL goes away
    Timeout::new(REVOKE_DELAY_MILLIS, move || {
        let _ = web_sys::Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

pub fn download_csv(filename: &str, csv: &str) -> Result<(), ExportError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(csv));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(browser_err)?;
    save_blob(&blob, filename)
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, catch, js_namespace = jspdf, js_class = "jsPDF")]
    fn new(options: &JsValue) -> Result<JsPdf, JsValue>;

    #[wasm_bindgen(method)]
    fn text(this: &JsPdf, text: &str, x: f64, y: f64);

    #[wasm_bindgen(method, catch, js_name = autoTable)]
    fn auto_table(this: &JsPdf, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn save(this: &JsPdf, filename: &str);
}

#[derive(Serialize)]
struct PdfOptions {
    orientation: &'static str,
    unit: &'static str,
    format: &'static str,
}

#[derive(Serialize)]
struct AutoTableOptions<'a> {
    head: Vec<Vec<&'a str>>,
    body: &'a [Vec<String>],
    #[serde(rename = "startY")]
    start_y: f64,
}

fn pdf_loaded() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("jspdf")).ok())
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// Render a titled landscape table and save it
pub fn export_pdf<T>(title: &str, columns: &[Column<T>], rows: &[T], filename: &str) -> Result<(), ExportError> {
    if !pdf_loaded() {
        return Err(ExportError::PdfUnavailable);
    }
    let options = serde_wasm_bindgen::to_value(&PdfOptions {
        orientation: "landscape",
        unit: "pt",
        format: "a4",
    })
    .map_err(|e| ExportError::Browser(e.to_string()))?;
    let doc = JsPdf::new(&options).map_err(|_| ExportError::PdfUnavailable)?;

    let (head, body) = table_cells(columns, rows);
    doc.text(title, 40.0, 40.0);
    let table = serde_wasm_bindgen::to_value(&AutoTableOptions {
        head: vec![head],
        body: &body,
        start_y: 60.0,
    })
    .map_err(|e| ExportError::Browser(e.to_string()))?;
    doc.auto_table(&table).map_err(|_| ExportError::PdfUnavailable)?;
    doc.save(filename);
    Ok(())
}

// ========================
// Column Sets
// ========================

/// Inventory export columns, in report order
pub fn inventory_columns() -> Vec<Column<InventoryItem>> {
    vec![
        Column { header: "Property No.", value: |i| i.property_no.clone() },
        Column { header: "Item Name", value: |i| i.name.clone() },
        Column { header: "Category", value: |i| i.category.clone() },
        Column { header: "Quantity", value: |i| i.quantity.to_string() },
        Column { header: "Unit", value: |i| i.unit.clone() },
        Column { header: "Unit Cost", value: |i| format!("{:.2}", i.unit_cost) },
        Column { header: "Total Cost", value: |i| format!("{:.2}", i.total_cost()) },
        Column { header: "Date Acquired", value: |i| i.date_acquired.clone() },
        Column { header: "Status", value: |i| i.status.label().to_string() },
        Column { header: "Location", value: |i| i.location.clone().unwrap_or_default() },
    ]
}

pub fn assignment_columns() -> Vec<Column<AssignedItem>> {
    vec![
        Column { header: "Property No.", value: |a| a.property_no.clone() },
        Column { header: "Item Name", value: |a| a.item_name.clone() },
        Column { header: "Assigned To", value: |a| a.teacher_name.clone() },
        Column { header: "Quantity", value: |a| a.quantity.to_string() },
        Column { header: "Date Assigned", value: |a| a.date_assigned.clone() },
        Column { header: "Condition", value: |a| a.condition.label().to_string() },
        Column { header: "Remarks", value: |a| a.remarks.clone().unwrap_or_default() },
    ]
}

/// Columns for a (label, count, value) summary table
pub fn summary_columns() -> Vec<Column<crate::stats::GroupTotal>> {
    vec![
        Column { header: "Group", value: |g| g.label.clone() },
        Column { header: "Items", value: |g| g.count.to_string() },
        Column { header: "Total Value", value: |g| format!("{:.2}", g.value) },
    ]
}

/// PDF cells use display formatting rather than raw numbers
pub fn inventory_pdf_columns() -> Vec<Column<InventoryItem>> {
    vec![
        Column { header: "Property No.", value: |i| i.property_no.clone() },
        Column { header: "Item Name", value: |i| i.name.clone() },
        Column { header: "Category", value: |i| i.category.clone() },
        Column { header: "Qty", value: |i| format!("{} {}", i.quantity, i.unit) },
        Column { header: "Unit Cost", value: |i| format::peso(i.unit_cost) },
        Column { header: "Total Cost", value: |i| format::peso(i.total_cost()) },
        Column { header: "Acquired", value: |i| format::date(&i.date_acquired) },
        Column { header: "Status", value: |i| i.status.label().to_string() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemStatus;

    fn item(id: u32, name: &str, status: ItemStatus) -> InventoryItem {
        InventoryItem {
            id,
            property_no: format!("PN-{:03}", id),
            name: name.to_string(),
            description: None,
            category: "Furniture".to_string(),
            unit: "pcs".to_string(),
            quantity: 2,
            unit_cost: 1250.5,
            date_acquired: "2024-05-02".to_string(),
            status,
            location: Some("Room 101".to_string()),
            school_id: None,
        }
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_inventory_csv_one_row_per_item_with_header_order() {
        let rows = vec![
            item(1, "Teacher's table", ItemStatus::Available),
            item(2, "Chair, stackable", ItemStatus::Assigned),
        ];
        let csv = to_csv(&inventory_columns(), &rows);
        let lines: Vec<&str> = csv.trim_end().split("\r\n").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Property No.,Item Name,Category,Quantity,Unit,Unit Cost,Total Cost,Date Acquired,Status,Location"
        );
        assert_eq!(
            lines[1],
            "PN-001,Teacher's table,Furniture,2,pcs,1250.50,2501.00,2024-05-02,Available,Room 101"
        );
        assert!(lines[2].starts_with("PN-002,\"Chair, stackable\","));
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = to_csv(&inventory_columns(), &[]);
        assert_eq!(csv.matches("\r\n").count(), 1);
    }

    #[test]
    fn test_table_cells_align_with_headers() {
        let rows = vec![item(7, "Whiteboard", ItemStatus::UnderRepair)];
        let (head, body) = table_cells(&inventory_pdf_columns(), &rows);
        assert_eq!(head.len(), body[0].len());
        assert_eq!(body[0][3], "2 pcs");
        assert_eq!(body[0][7], "Under Repair");
    }

    #[test]
    fn test_dated_filename() {
        assert_eq!(dated_filename("inventory", "2024-09-01", "csv"), "inventory-2024-09-01.csv");
    }
}
