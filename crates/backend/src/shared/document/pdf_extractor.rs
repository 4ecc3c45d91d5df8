use super::DocumentError;
use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};
use std::collections::BTreeMap;

/// Текст документа, склеенный по страницам
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

/// Извлечь текст из PDF в памяти.
///
/// Страницы идут по порядку номеров. Каждый оператор вывода текста
/// (`Tj`, `TJ`, `'`, `"`) даёт один фрагмент; фрагменты страницы
/// склеиваются через пробел, после каждой страницы ставится `\n`.
/// Документ без страниц даёт пустую строку.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<ExtractedText, DocumentError> {
    let doc = Document::load_mem(bytes).map_err(|e| DocumentError::ParseError(e.to_string()))?;

    // BTreeMap: номера страниц уже отсортированы
    let pages = doc.get_pages();
    let mut text = String::new();

    for (page_num, page_id) in &pages {
        let items = page_text_items(&doc, *page_id)
            .map_err(|e| DocumentError::ParseError(format!("page {}: {}", page_num, e)))?;
        text.push_str(&items.join(" "));
        text.push('\n');
    }

    Ok(ExtractedText {
        text,
        page_count: pages.len(),
    })
}

/// Фрагменты текста страницы в порядке операторов содержимого
fn page_text_items(doc: &Document, page_id: ObjectId) -> Result<Vec<String>, lopdf::Error> {
    let encodings: BTreeMap<Vec<u8>, &str> = doc
        .get_page_fonts(page_id)
        .into_iter()
        .map(|(name, font)| (name, font.get_font_encoding()))
        .collect();

    let data = doc.get_page_content(page_id)?;
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let content = Content::decode(&data)?;
    let mut encoding: Option<&str> = None;
    let mut items = Vec::new();

    for operation in &content.operations {
        let shown = match operation.operator.as_str() {
            "Tf" => {
                if let Some(font) = operation.operands.first() {
                    encoding = encodings.get(font.as_name()?).copied();
                }
                continue;
            }
            "Tj" | "TJ" | "'" => operation.operands.first(),
            "\"" => operation.operands.get(2),
            _ => continue,
        };

        let mut item = String::new();
        if let Some(operand) = shown {
            decode_operand(&mut item, encoding, operand);
        }
        if !item.is_empty() {
            items.push(item);
        }
    }

    Ok(items)
}

/// Строка или массив `TJ`; большой отрицательный сдвиг считается пробелом
fn decode_operand(item: &mut String, encoding: Option<&str>, operand: &Object) {
    match operand {
        Object::String(bytes, _) => item.push_str(&Document::decode_text(encoding, bytes)),
        Object::Array(parts) => {
            for part in parts {
                match part {
                    Object::Integer(shift) if *shift < -100 => item.push(' '),
                    Object::Real(shift) if *shift < -100.0 => item.push(' '),
                    other => decode_operand(item, encoding, other),
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Собрать минимальный PDF: по одной строке текста на страницу
    fn sample_pdf(page_texts: &[&str]) -> Vec<u8> {
        pdf_with_pages(
            page_texts
                .iter()
                .map(|page_text| {
                    vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 24.into()]),
                        Operation::new("Td", vec![100.into(), 600.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                        Operation::new("ET", vec![]),
                    ]
                })
                .collect(),
        )
    }

    /// PDF из готовых операций содержимого, шрифт `F1` (Courier) на каждой странице
    fn pdf_with_pages(pages_operations: Vec<Vec<Operation>>) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for operations in pages_operations {
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    /// PDF с одной страницей из произвольных операций содержимого
    fn single_page_pdf(operations: Vec<Operation>) -> Vec<u8> {
        pdf_with_pages(vec![operations])
    }

    #[test]
    fn test_extract_single_page() {
        let extracted = extract_pdf_text(&sample_pdf(&["Hello World"])).unwrap();
        assert_eq!(extracted.page_count, 1);
        assert_eq!(extracted.text, "Hello World\n");
    }

    #[test]
    fn test_extract_pages_in_order() {
        let extracted = extract_pdf_text(&sample_pdf(&["First page", "Second page"])).unwrap();
        assert_eq!(extracted.page_count, 2);
        assert_eq!(extracted.text, "First page\nSecond page\n");
    }

    #[test]
    fn test_items_in_one_text_block_are_space_separated() {
        let bytes = single_page_pdf(vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal("first line")]),
            Operation::new("Td", vec![0.into(), (-14).into()]),
            Operation::new("Tj", vec![Object::string_literal("second line")]),
            Operation::new("ET", vec![]),
        ]);

        let extracted = extract_pdf_text(&bytes).unwrap();
        assert_eq!(extracted.text, "first line second line\n");
    }

    #[test]
    fn test_exact_output_across_pages() {
        let bytes = pdf_with_pages(vec![
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Tj", vec![Object::string_literal("a")]),
                Operation::new("ET", vec![]),
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new(
                    "TJ",
                    vec![Object::Array(vec![
                        Object::string_literal("b"),
                        (-20).into(),
                        Object::string_literal("c"),
                        (-250).into(),
                        Object::string_literal("d"),
                    ])],
                ),
                Operation::new("ET", vec![]),
            ],
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Tj", vec![Object::string_literal("e")]),
                Operation::new("ET", vec![]),
            ],
        ]);

        let extracted = extract_pdf_text(&bytes).unwrap();
        assert_eq!(extracted.page_count, 2);
        assert_eq!(extracted.text, "a bc d\ne\n");
    }

    #[test]
    fn test_page_without_text_is_empty_line() {
        let extracted = extract_pdf_text(&single_page_pdf(vec![
            Operation::new("q", vec![]),
            Operation::new("Q", vec![]),
        ]))
        .unwrap();
        assert_eq!(extracted.page_count, 1);
        assert_eq!(extracted.text, "\n");
    }

    #[test]
    fn test_document_without_pages_is_empty() {
        let extracted = extract_pdf_text(&pdf_with_pages(vec![])).unwrap();
        assert_eq!(extracted.page_count, 0);
        assert_eq!(extracted.text, "");
    }

    #[test]
    fn test_invalid_bytes_fail() {
        let result = extract_pdf_text(b"definitely not a pdf");
        assert!(matches!(result, Err(DocumentError::ParseError(_))));
    }
}
