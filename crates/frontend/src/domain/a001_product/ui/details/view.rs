use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

use super::view_model::{ProductDetailsViewModel, ProductForm};
use crate::shared::modal_frame::ModalFrame;

/// Product create/edit form in a modal
#[component]
pub fn ProductDetails(
    /// Product to edit; `None` opens an empty creation form
    product: Option<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(product.as_ref());
    let title = if vm.is_edit_mode() {
        "Edit product"
    } else {
        "New product"
    };

    let field = move |label: &'static str,
                      input_type: &'static str,
                      disabled: bool,
                      get: fn(&ProductForm) -> String,
                      set: fn(&mut ProductForm, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=input_type
                    class="form-control"
                    disabled=disabled
                    prop:value=move || vm.form.with(|f| get(f))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    view! {
        <ModalFrame title=title on_close=on_cancel>
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="form">
                {field("ID", "number", vm.is_edit_mode(), |f| f.id.clone(), |f, v| f.id = v)}
                {field("Name", "text", false, |f| f.name.clone(), |f, v| f.name = v)}
                <div class="form-group">
                    <label>"Description"</label>
                    <textarea
                        class="form-control"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.description = value);
                        }
                    ></textarea>
                </div>
                {field("Price (₫)", "number", false, |f| f.price.clone(), |f, v| f.price = v)}
                {field("Quantity", "number", false, |f| f.quantity.clone(), |f, v| f.quantity = v)}

                <div class="form-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=Signal::derive(move || vm.is_saving.get())
                    >
                        {move || if vm.is_saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                </div>
            </div>
        </ModalFrame>
    }
}
