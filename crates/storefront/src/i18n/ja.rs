use super::Messages;

pub const MESSAGES: Messages = Messages {
    site_name: "TradeHub トレードハブ",
    nav_home: "ホーム",
    nav_products: "ショップ",
    nav_wholesale: "卸売",
    nav_seller_center: "セラーセンター",
    nav_about: "会社概要",
    nav_contact: "お問い合わせ",
    nav_login: "ログイン",
    nav_register: "新規登録",
    language_label: "言語",
    footer_rights: "無断転載を禁じます。",

    home_title: "消費者とバイヤーのためのひとつのマーケットプレイス",
    home_subtitle: "小売で買い物をするか、認証済み事業者としてまとめて仕入れましょう。",
    home_featured: "おすすめ商品",
    home_categories: "カテゴリーから探す",
    home_cta_retail: "ショッピングを始める",
    home_cta_wholesale: "事業者向け卸売",
    about_title: "トレードハブについて",
    about_body: "トレードハブは韓国のメーカーと世界中の消費者・法人バイヤーを4つの言語でつなぎます。",

    products_title: "すべての商品",
    wholesale_title: "卸売カタログ",
    wholesale_subtitle: "認証済み事業者会員限定の卸売価格。",
    category_label: "カテゴリー",
    empty_listing: "表示できる商品がありません。",
    out_of_stock: "在庫切れ",
    stock_label: "在庫",
    moq_label: "最小注文数",
    view_details: "詳細を見る",

    spec_title: "仕様",
    spec_size: "サイズ",
    spec_material: "素材",
    spec_colors: "カラー",
    spec_weight: "重さ",
    spec_width: "幅",
    price_label: "価格",
    usd_price_label: "ドル価格",
    buy_now: "今すぐ購入",
    request_quote: "見積もりを依頼",

    purchase_title: "ご注文手続き",
    quantity_label: "数量",
    submit_purchase: "注文を確定",
    purchase_done_title: "ご注文を承りました",
    purchase_done_body: "ありがとうございます。デモストアのため実際の発送はありません。",
    order_number_label: "注文番号",
    total_label: "合計",
    quote_title: "卸売見積もり依頼",
    company_label: "会社名",
    email_label: "メールアドレス",
    message_label: "メッセージ",
    submit_quote: "依頼を送信",
    quote_done_title: "見積もりを依頼しました",
    quote_done_body: "卸売担当者より2営業日以内にメールでご連絡します。",

    contact_title: "お問い合わせ",
    name_label: "お名前",
    contact_submit: "送信する",
    contact_done: "ありがとうございます。メッセージを受け付けました。",
    login_title: "ログイン",
    password_label: "パスワード",
    login_submit: "ログイン",

    register_title: "アカウント作成",
    register_choose: "トレードハブをどのようにご利用になりますか？",
    register_personal: "個人会員",
    register_personal_desc: "ご自身のために小売商品を購入します。",
    register_business: "事業者会員",
    register_business_desc: "卸売で仕入れ、セラーセンターで販売します。",
    password_confirm_label: "パスワード（確認）",
    business_number_label: "事業者登録番号",
    register_submit: "登録する",
    register_pending_title: "登録申請を受け付けました",
    register_pending_body: "事業者書類を審査中です。認証が完了すると卸売をご利用いただけます。",
    register_personal_done: "トレードハブへようこそ！アカウントの準備ができました。",
    verification_status_label: "認証状況",
    user_type_label: "会員種別",
    status_pending: "審査中",
    status_verified: "認証済み",
    status_rejected: "却下",
    status_unset: "未登録",
    user_type_business: "事業者",
    user_type_personal: "個人",

    seller_title: "セラーセンター",
    seller_overview: "概要",
    seller_products: "商品管理",
    seller_orders: "注文管理",
    seller_total_products: "出品商品",
    seller_low_stock: "在庫僅少",
    seller_wholesale_count: "卸売商品",
    seller_order_status: "ステータス",
    seller_unverified_notice: "事業者認証がまだ完了していません。審査が終わるまで卸売での購入はできません。",
    order_status_paid: "支払い済み",
    order_status_shipped: "発送済み",
    order_status_delivered: "配達済み",

    denied_title: "アクセスが制限されています",
    denied_wholesale_body: "卸売カタログは認証済みの事業者会員のみご利用いただけます。",
    denied_seller_body: "セラーセンターは事業者会員のみご利用いただけます。",
    cta_register_business: "事業者として登録",
    cta_go_retail: "小売ショップへ",
    cta_login: "ログイン",
    cta_home: "ホームに戻る",
    loading: "読み込み中…",
    deferred_noscript: "このセクションの読み込みには JavaScript が必要です。",

    not_found_title: "ページが見つかりません",
    not_found_body: "お探しのページまたは商品が見つかりませんでした。",

    chat_title: "ライブサポート",
    chat_open: "チャットで相談",
    chat_close: "閉じる",
    chat_placeholder: "どの言語でもメッセージを入力できます…",
    chat_send: "送信",
    chat_greeting: "こんにちは！ご用件をお聞かせください。",
    chat_reply: "お問い合わせありがとうございます！担当者よりまもなくご連絡します。",
    chat_email_offer: "この会話の記録をメールで受け取りますか？",
    chat_email_send: "会話記録を送信",
    chat_email_sent: "会話記録を送信しました:",
    chat_email_empty: "送信できる会話がまだありません。",

    mock_title: "デモアカウントの状態",
    mock_body: "このストアには実際のアカウントはありません。アクセス制御に使う状態を選んでください。",
    mock_submit: "適用",

    err_required: "必須項目です。",
    err_email: "有効なメールアドレスを入力してください。",
    err_password_policy: "英字・数字・記号を含む8文字以上で入力してください。",
    err_password_mismatch: "パスワードが一致しません。",
    err_business_number: "000-00-00000 の形式で入力してください。",
    err_quantity_number: "整数を入力してください。",
    err_quantity_min: "注文数量の下限:",
    err_quantity_max: "注文数量の上限:",
};
