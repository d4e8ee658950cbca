pub mod cart_modal;
