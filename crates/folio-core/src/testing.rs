//! In-memory PDF fixtures for tests.
//!
//! Available to other crates through the `testing` feature.

use lopdf::content::{Content, Operation};
use lopdf::encryption::{decrypt_object, get_encryption_key};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

/// Build a PDF where `pages[i]` holds the lines drawn on page `i + 1`.
///
/// Lines are drawn top to bottom in Helvetica with enough leading that a
/// layout-aware extractor breaks them onto separate lines.
pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    pdf_with_font("Helvetica", pages)
}

/// Same layout as [`pdf_with_pages`], drawn with a Type1 font named
/// `base_font` that carries no `Widths` array.
///
/// Any name outside the 14 standard fonts makes pdf-extract print
/// diagnostics while it reads the page.
pub fn pdf_with_font(base_font: &str, pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = page_tree(base_font, pages);
    save(&mut doc)
}

/// A structurally valid PDF whose page tree has no kids.
pub fn pdf_without_pages() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => Vec::<Object>::new(),
        "Count" => 0,
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    save(&mut doc)
}

/// [`pdf_with_pages`] encrypted with RC4 under the empty user password.
pub fn encrypted_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = page_tree("Helvetica", pages);
    encrypt(&mut doc, None);
    save(&mut doc)
}

/// [`pdf_with_pages`] encrypted so that the empty password is rejected.
pub fn locked_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = page_tree("Helvetica", pages);
    encrypt(&mut doc, Some(vec![0u8; 32]));
    save(&mut doc)
}

fn page_tree(base_font: &str, pages: &[&[&str]]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("TL", vec![36.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
        ];
        for line in lines.iter() {
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Apply the standard security handler (V1, R2, 40-bit RC4) in place.
///
/// With `user_check` unset the document has no `/U` entry, so any password
/// derives a key and the empty one opens it. RC4 is symmetric, which lets
/// lopdf's object decryption produce the ciphertext.
fn encrypt(doc: &mut Document, user_check: Option<Vec<u8>>) {
    let mut handler = dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "Length" => 40,
        "O" => Object::string_literal(vec![0x5au8; 32]),
        "P" => -4,
        "CF" => dictionary! {
            "StdCF" => dictionary! { "CFM" => "V2" },
        },
    };
    if let Some(check) = user_check {
        handler.set("U", Object::string_literal(check));
    }
    let encrypt_id = doc.add_object(handler);
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(b"folio-fixture-01".to_vec()),
            Object::string_literal(b"folio-fixture-01".to_vec()),
        ],
    );

    let key = get_encryption_key(doc, "", false).expect("derive fixture key");
    let ids: Vec<ObjectId> = doc.objects.keys().copied().filter(|&id| id != encrypt_id).collect();
    for id in ids {
        let Some(object) = doc.objects.get_mut(&id) else {
            continue;
        };
        let Ok(cipher) = decrypt_object(&key, id, object, false) else {
            continue;
        };
        match object {
            Object::Stream(stream) => stream.set_content(cipher),
            Object::String(content, _) => *content = cipher,
            _ => {}
        }
    }
}

fn save(doc: &mut Document) -> Vec<u8> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("serialize fixture PDF");
    buffer
}
