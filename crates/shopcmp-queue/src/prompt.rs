//! Builds the natural-language prompt sent to `/compare`.

use shopcmp_core::{Language, SpecificationGroup};

use crate::queue::QueueEntry;

const NO_SPECIFICATIONS: &str = "No specifications available";

const EN_INTRO: &str = "Here are the list of products and attributes:";
const EN_REQUEST: &str = "Help me compare these products to find which is the best product. \
Consider price, specifications, and overall value for money.";

const VI_INTRO: &str = "Đây là các sản phẩm và thông tin của chúng:";
const VI_REQUEST: &str = "Hãy cho tôi biết ưu điểm và nhược điểm của mỗi sản phẩm, \
cân nhắc giá, thông số kỹ thuật và giá trị tổng thể, và tôi nên mua sản phẩm nào nhất.";

/// Renders every entry, in queue order, inside the template for `language`.
#[must_use]
pub fn build_prompt(entries: &[QueueEntry], language: Language) -> String {
    let blocks = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| render_entry(i + 1, entry))
        .collect::<Vec<_>>()
        .join("\n\n");

    let (intro, request) = match language {
        Language::En => (EN_INTRO, EN_REQUEST),
        Language::Vi => (VI_INTRO, VI_REQUEST),
    };
    format!("{intro}\n\n{blocks}\n\n{request}")
}

fn render_entry(index: usize, entry: &QueueEntry) -> String {
    let lines: Vec<String> = SpecificationGroup::flatten(&entry.specifications)
        .map(|attr| format!("{}: {}", attr.name, attr.value))
        .collect();
    let specs = if lines.is_empty() {
        NO_SPECIFICATIONS.to_owned()
    } else {
        lines.join("\n")
    };

    format!(
        "{index}. {name}\nPrice: {price}\nBrand: {brand}\nSpecifications:\n{specs}",
        name = entry.product.name,
        price = entry.product.price_label(),
        brand = entry.product.brand_or_unknown(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcmp_core::{Attribute, Product, ProductId};

    fn entry(id: i64, name: &str, price: i64, specs: Vec<SpecificationGroup>) -> QueueEntry {
        QueueEntry::new(
            Product {
                id: ProductId::from(id),
                name: name.to_owned(),
                price,
                original_price: None,
                brand_name: None,
                thumbnail_url: None,
                url_path: None,
                review_count: None,
                specifications: None,
            },
            specs,
        )
    }

    #[test]
    fn english_prompt_lists_products_in_order_then_request() {
        let entries = [entry(1, "A", 1000, vec![]), entry(2, "B", 2000, vec![])];
        let prompt = build_prompt(&entries, Language::En);

        let a = prompt.find("1. A").expect("first product missing");
        let b = prompt.find("2. B").expect("second product missing");
        assert!(a < b);
        assert!(prompt.ends_with(EN_REQUEST));
        assert!(prompt[b..].contains("\n\nHelp me compare these products"));
    }

    #[test]
    fn renders_exact_block_layout() {
        let mut with_brand = entry(
            7,
            "Laptop X",
            15_990_000,
            vec![
                SpecificationGroup {
                    name: "Display".to_owned(),
                    attributes: vec![Attribute {
                        name: "Size".to_owned(),
                        value: "14 inch".to_owned(),
                    }],
                },
                SpecificationGroup {
                    name: "Memory".to_owned(),
                    attributes: vec![Attribute {
                        name: "RAM".to_owned(),
                        value: "16 GB".to_owned(),
                    }],
                },
            ],
        );
        with_brand.product.brand_name = Some("Acme".to_owned());
        let bare = entry(8, "Laptop Y", 999, vec![]);

        let prompt = build_prompt(&[with_brand, bare], Language::En);
        let expected = "Here are the list of products and attributes:\n\n\
1. Laptop X\nPrice: 15,990,000 VND\nBrand: Acme\nSpecifications:\nSize: 14 inch\nRAM: 16 GB\n\n\
2. Laptop Y\nPrice: 999 VND\nBrand: Unknown\nSpecifications:\nNo specifications available\n\n\
Help me compare these products to find which is the best product. \
Consider price, specifications, and overall value for money.";
        assert_eq!(prompt, expected);
    }

    #[test]
    fn vietnamese_prompt_uses_vietnamese_template() {
        let entries = [entry(1, "A", 1000, vec![]), entry(2, "B", 2000, vec![])];
        let prompt = build_prompt(&entries, Language::Vi);
        assert!(prompt.starts_with(VI_INTRO));
        assert!(prompt.ends_with(VI_REQUEST));
        assert!(!prompt.contains("Help me compare"));
    }

    #[test]
    fn group_without_attributes_counts_as_no_specifications() {
        let entries = [entry(
            1,
            "A",
            1000,
            vec![SpecificationGroup {
                name: "Empty".to_owned(),
                attributes: vec![],
            }],
        )];
        let prompt = build_prompt(&entries, Language::En);
        assert!(prompt.contains("Specifications:\nNo specifications available"));
    }
}
