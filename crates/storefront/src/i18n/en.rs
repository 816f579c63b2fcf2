use super::Messages;

pub const MESSAGES: Messages = Messages {
    site_name: "TradeHub",
    nav_home: "Home",
    nav_products: "Shop",
    nav_wholesale: "Wholesale",
    nav_seller_center: "Seller Center",
    nav_about: "About",
    nav_contact: "Contact",
    nav_login: "Log in",
    nav_register: "Sign up",
    language_label: "Language",
    footer_rights: "All rights reserved.",

    home_title: "One marketplace for shoppers and buyers",
    home_subtitle: "Shop retail, or source in bulk as a verified business.",
    home_featured: "Featured products",
    home_categories: "Browse by category",
    home_cta_retail: "Start shopping",
    home_cta_wholesale: "Wholesale for businesses",
    about_title: "About TradeHub",
    about_body: "TradeHub connects Korean makers with consumers and business buyers worldwide, in four languages.",

    products_title: "All products",
    wholesale_title: "Wholesale catalog",
    wholesale_subtitle: "Bulk pricing for verified business members.",
    category_label: "Category",
    empty_listing: "No products to show yet.",
    out_of_stock: "Out of stock",
    stock_label: "In stock",
    moq_label: "Minimum order",
    view_details: "View details",

    spec_title: "Specifications",
    spec_size: "Size",
    spec_material: "Material",
    spec_colors: "Colors",
    spec_weight: "Weight",
    spec_width: "Width",
    price_label: "Price",
    usd_price_label: "USD price",
    buy_now: "Buy now",
    request_quote: "Request a quote",

    purchase_title: "Checkout",
    quantity_label: "Quantity",
    submit_purchase: "Place order",
    purchase_done_title: "Order placed",
    purchase_done_body: "Thank you! This is a demo store, so nothing will be shipped.",
    order_number_label: "Order number",
    total_label: "Total",
    quote_title: "Wholesale quote request",
    company_label: "Company",
    email_label: "Email",
    message_label: "Message",
    submit_quote: "Send request",
    quote_done_title: "Quote requested",
    quote_done_body: "Our wholesale team will reply by email within two business days.",

    contact_title: "Contact us",
    name_label: "Name",
    contact_submit: "Send message",
    contact_done: "Thanks! We received your message.",
    login_title: "Log in",
    password_label: "Password",
    login_submit: "Log in",

    register_title: "Create an account",
    register_choose: "How will you use TradeHub?",
    register_personal: "Personal",
    register_personal_desc: "Shop retail products for yourself.",
    register_business: "Business",
    register_business_desc: "Buy wholesale and sell through the Seller Center.",
    password_confirm_label: "Confirm password",
    business_number_label: "Business registration number",
    register_submit: "Sign up",
    register_pending_title: "Registration received",
    register_pending_body: "Your business documents are under review. Wholesale opens once you are verified.",
    register_personal_done: "Welcome to TradeHub! Your account is ready.",
    verification_status_label: "Verification status",
    user_type_label: "Account type",
    status_pending: "Under review",
    status_verified: "Verified",
    status_rejected: "Rejected",
    status_unset: "Not registered",
    user_type_business: "Business",
    user_type_personal: "Personal",

    seller_title: "Seller Center",
    seller_overview: "Overview",
    seller_products: "Products",
    seller_orders: "Orders",
    seller_total_products: "Listed products",
    seller_low_stock: "Low stock",
    seller_wholesale_count: "Wholesale listings",
    seller_order_status: "Status",
    seller_unverified_notice: "Your business is not verified yet. Wholesale buying stays locked until review completes.",
    order_status_paid: "Paid",
    order_status_shipped: "Shipped",
    order_status_delivered: "Delivered",

    denied_title: "Access restricted",
    denied_wholesale_body: "The wholesale catalog is available to verified business members only.",
    denied_seller_body: "The Seller Center is available to business members only.",
    cta_register_business: "Register as a business",
    cta_go_retail: "Go to retail shop",
    cta_login: "Log in",
    cta_home: "Back to home",
    loading: "Loading…",
    deferred_noscript: "This section needs JavaScript to load.",

    not_found_title: "Page not found",
    not_found_body: "We couldn't find what you were looking for.",

    chat_title: "Live support",
    chat_open: "Chat with us",
    chat_close: "Close",
    chat_placeholder: "Type a message in any language…",
    chat_send: "Send",
    chat_greeting: "Hi! How can we help you today?",
    chat_reply: "Thanks for reaching out! A TradeHub agent will follow up shortly.",
    chat_email_offer: "Want a copy of this conversation? Enter your email.",
    chat_email_send: "Email transcript",
    chat_email_sent: "Transcript sent to",
    chat_email_empty: "There is nothing to send yet.",

    mock_title: "Demo account state",
    mock_body: "This storefront has no real accounts. Pick the state the access gate should see.",
    mock_submit: "Apply",

    err_required: "This field is required.",
    err_email: "Please enter a valid email address.",
    err_password_policy: "Use at least 8 characters with a letter, a number and a symbol.",
    err_password_mismatch: "Passwords do not match.",
    err_business_number: "Use the format 000-00-00000.",
    err_quantity_number: "Enter a whole number.",
    err_quantity_min: "Quantity must be at least",
    err_quantity_max: "Quantity cannot exceed",
};
