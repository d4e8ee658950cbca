use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api;
use crate::domain::a003_cart::context::use_cart;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::dialog;
use crate::shared::format::format_price;

/// Products matching `filter`, in catalog order
pub fn visible_products(products: &[Product], filter: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.matches_filter(filter))
        .cloned()
        .collect()
}

/// Storefront product grid with search and add-to-cart
#[component]
pub fn ProductCatalog() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let cart = use_cart();
    let (products, set_products) = signal(Vec::<Product>::new());
    let (filter, set_filter) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(true);

    // Refetch whenever stock may have changed (initial load, after checkout)
    Effect::new(move |_| {
        ctx.catalog_version.track();
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => {
                    set_products.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Could not load products: {}", e))),
            }
            set_is_loading.set(false);
        });
    });

    let add_to_cart = move |product: &Product| match cart.add_product(product) {
        Ok(_) => dialog::alert("Added to cart!"),
        Err(e) => dialog::alert(&e.to_string()),
    };

    let visible = move || products.with(|all| filter.with(|f| visible_products(all, f)));

    view! {
        <section class="catalog">
            <div class="catalog__toolbar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search products..."
                    prop:value=move || filter.get()
                    on:input=move |ev| set_filter.set(event_target_value(&ev))
                />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="products-grid">
                {move || {
                    if is_loading.get() && products.with(|p| p.is_empty()) {
                        return view! { <p class="loading">"Loading products..."</p> }.into_any();
                    }
                    let items = visible();
                    if items.is_empty() {
                        return view! { <p class="empty">"No products found."</p> }.into_any();
                    }
                    items
                        .into_iter()
                        .map(|product| {
                            let in_stock = product.in_stock();
                            let stock_label = if in_stock {
                                format!("In stock: {}", product.quantity)
                            } else {
                                "Out of stock".to_string()
                            };
                            let description = product
                                .description
                                .clone()
                                .unwrap_or_else(|| "No description".to_string());
                            let price = format_price(product.price);
                            let name = product.name.clone();
                            view! {
                                <div class="product-card">
                                    <h3>{name}</h3>
                                    <p class="description">{description}</p>
                                    <p class="price">{price}</p>
                                    <p class="stock" class=("stock--empty", !in_stock)>{stock_label}</p>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        disabled=!in_stock
                                        on_click=move |_| add_to_cart(&product)
                                    >
                                        "Add to cart"
                                    </Button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ProductId;

    fn product(id: i64, name: &str, description: Option<&str>) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            description: description.map(str::to_string),
            price: 1000.0,
            quantity: 2,
            owner: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let products = vec![
            product(1, "Green Tea", None),
            product(2, "Coffee", Some("Dark roast")),
            product(3, "Mug", Some("For tea lovers")),
        ];
        let ids: Vec<i64> = visible_products(&products, "TEA")
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(visible_products(&products, "  ").len(), 3);
    }
}
