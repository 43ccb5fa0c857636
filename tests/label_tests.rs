//! # Golden Tests
//!
//! End-to-end checks of the bytes and markup a printer receives. Expected
//! output is written inline so a diff shows exactly which directive or byte
//! moved.

use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;

use recibo::json_api::JsonLabel;
use recibo::logo::{self, LogoDefinition, anchor};
use recibo::printer::Printer;
use recibo::render::raster::{self, Threshold};
use recibo::{LabelDocument, PrintLayoutConfig};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

// ============================================================================
// LABEL MARKUP
// ============================================================================

#[test]
fn test_golden_receipt_label() {
    let mut layout = PrintLayoutConfig::default();
    let mut doc = LabelDocument::new();

    doc.add_logo(&mut layout);
    doc.add_text_line(&mut layout, "CAFE LUNA", true);
    doc.add_divider(&mut layout);
    doc.add_line_with_columns(&mut layout, &[(30, "2"), (80, "Espresso"), (450, "5.00")]);
    doc.add_label_value_line(&mut layout, "Total", 5.0, 400, 8);
    doc.add_payment_line(&mut layout, "Efectivo", 10.0);
    doc.add_empty_lines(&mut layout, 1);
    doc.add_qr_code(&mut layout, "https://example.com/r/1042", 5, true);
    doc.add_paragraph(&mut layout, "gracias por su compra", 10);

    let expected = [
        "^XA^PW600^LL800^PR2^MTT",
        "^FO200,400^XGlogo,1,1^FS",
        "^FO246,620^FDCAFE LUNA^FS",
        "^FO30,650^GB500,4,1^FS",
        "^FO30,680^FD2^FS",
        "^FO80,680^FDEspresso^FS",
        "^FO450,680^FD5.00^FS",
        "^FO30,710^FDTotal^FS",
        "^FO400,710^FD5.00    ^FS",
        "^FO30,740^FDEfectivo:^FS",
        "^FO400,740^FD10.00^FS",
        "^FO140,800^BQN,2,5^FDLA,https://example.com/r/1042^FS",
        "^FO30,955^FD gracias  ^FS",
        "^FO30,985^FD  por su  ^FS",
        "^FO30,1015^FD  compra  ^FS",
        "^XZ",
    ]
    .join("\n");

    assert_eq!(doc.to_label(&layout), expected);
    assert_eq!(layout.y_start, 1045);
    assert!(!layout.exceeds_limit());
}

#[test]
fn test_golden_json_matches_builder() {
    let json = r#"{
        "lines": [
            {"type": "logo"},
            {"type": "text", "content": "CAFE LUNA", "centered": true},
            {"type": "divider"},
            {"type": "label_value", "label": "Total", "value": 5, "width": 8},
            {"type": "qr_code", "data": "https://example.com/r/1042"}
        ]
    }"#;
    let (from_json, json_layout) = JsonLabel::from_json(json).unwrap().build().unwrap();

    let mut layout = PrintLayoutConfig::default();
    let mut doc = LabelDocument::new();
    doc.add_logo(&mut layout);
    doc.add_text_line(&mut layout, "CAFE LUNA", true);
    doc.add_divider(&mut layout);
    doc.add_label_value_line(&mut layout, "Total", 5.0, 400, 8);
    doc.add_qr_code(&mut layout, "https://example.com/r/1042", 5, true);

    assert_eq!(from_json.to_zpl(), doc.to_zpl());
    assert_eq!(json_layout, layout);
}

#[test]
fn test_long_receipt_reports_overflow() {
    let mut layout = PrintLayoutConfig::default();
    let mut doc = LabelDocument::new();
    for i in 0..100 {
        doc.add_text_line(&mut layout, &format!("item {}", i), false);
    }
    // 400 + 100 * 30
    assert_eq!(layout.y_start, 3400);
    assert!(layout.exceeds_limit());
    assert_eq!(doc.directives().len(), 100);
}

// ============================================================================
// LOGOS
// ============================================================================

#[test]
fn test_logo_upload_then_place() {
    // 12x2 image: left half black on row 0, right half black on row 1
    let image = RgbaImage::from_fn(12, 2, |x, y| {
        let left = x < 6;
        if (y == 0) == left { BLACK } else { WHITE }
    });
    let definition = logo::image_to_definition_block(&image, "logo").unwrap();
    assert_eq!(definition.block(), "~DGlogo.GRF,4,2,FC0003F0");

    let mut layout = PrintLayoutConfig::default();
    let mut doc = LabelDocument::new();
    doc.add_logo_definition(&mut layout, &definition.block(), 16, 2);

    assert_eq!(
        doc.to_zpl(),
        "~DGlogo.GRF,4,2,FC0003F0\n^FO292,400^XGlogo.GRF,1,1^FS"
    );
    assert_eq!(layout.y_start, 432);
}

#[test]
fn test_logo_definition_round_trip_matches_threshold() {
    let image = RgbaImage::from_fn(21, 7, |x, y| {
        let v = ((x * 37 + y * 91) % 256) as u8;
        Rgba([v, v.wrapping_mul(3), 255 - v, 255])
    });
    let definition = logo::image_to_definition_block(&image, "grad").unwrap();
    let parsed = LogoDefinition::parse(&definition.block()).unwrap();

    for y in 0..7 {
        for x in 0..24 {
            let expected = x < 21 && Threshold::LOGO.is_ink(*image.get_pixel(x as u32, y as u32));
            assert_eq!(parsed.is_ink(x, y), expected, "dot ({}, {})", x, y);
        }
    }
}

#[test]
fn test_transparent_logo_upload_prints_ink() {
    let image = RgbaImage::from_pixel(8, 1, Rgba([0, 0, 0, 0]));
    let mut printer = Printer::new(Vec::new());
    printer.upload_logo(&image, "l").unwrap();
    printer.upload_logo(&RgbaImage::new(0, 0), "empty").unwrap();
    assert_eq!(printer.into_inner(), b"~DGl.GRF,1,1,FF".to_vec());
}

#[test]
fn test_authored_block_follows_cursor() {
    let authored = "~DGLOGO.GRF,2,1,\nFF\n81\n^FO150,0^XGLOGO.GRF,1,1^FS\n^FO0,999^FDfooter^FS";
    let mut layout = PrintLayoutConfig::default();
    let mut doc = LabelDocument::new();

    doc.add_text_line(&mut layout, "top", false);
    doc.add_logo_from_zpl_file(&mut layout, authored, 100);
    doc.add_text_line(&mut layout, "after", false);

    let zpl = doc.to_zpl();
    let places: Vec<(u64, u64)> = anchor::placements(&zpl).iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(
        places,
        vec![(30, 400), (150, 430), (0, 999), (30, 560)]
    );
}

// ============================================================================
// RASTER BYTES
// ============================================================================

#[test]
fn test_golden_raster_job() {
    // 3x2: row 0 = B W B, row 1 = W B W
    let image = RgbaImage::from_fn(3, 2, |x, y| if (x + y) % 2 == 0 { BLACK } else { WHITE });
    let command = raster::encode(&image, 16, Threshold::NonWhite).unwrap();

    let mut printer = Printer::new(Vec::new());
    printer.print_raster(&command).unwrap();

    assert_eq!(
        printer.into_inner(),
        vec![
            0x1D, 0x76, 0x30, 0x00, // GS v 0, normal mode
            0x02, 0x00, // 2 bytes per row
            0x02, 0x00, // 2 rows
            0b1010_0000, 0x00, // row 0
            0b0100_0000, 0x00, // row 1
            0x0A, // LF
            0x1B, 0x61, 0x00, // align left
        ]
    );
}

#[test]
fn test_centered_raster_rows_are_full_width() {
    for width in [1u32, 7, 8, 9, 63, 100, 399] {
        let image = RgbaImage::from_pixel(width, 3, BLACK);
        let command = raster::encode_centered(&image, 400, Threshold::NonWhite).unwrap();
        assert_eq!(command.width_bytes, 50);
        assert_eq!(command.data.len(), 50 * 3, "width {}", width);
    }
}

#[test]
fn test_printer_qr_job_shape() {
    let mut printer = Printer::new(Vec::new());
    printer.print_qr("RECIBO-1042").unwrap();
    let sent = printer.into_inner();

    let header = &sent[..8];
    assert_eq!(header, &[0x1D, 0x76, 0x30, 0x00, 50, 0, 0x90, 0x01]);
    // quiet zone keeps the first row blank
    assert!(sent[8..58].iter().all(|&b| b == 0));
    assert_eq!(&sent[sent.len() - 4..], &[0x0A, 0x1B, 0x61, 0x00]);
}
