use super::Messages;

pub const MESSAGES: Messages = Messages {
    site_name: "TradeHub 贸易汇",
    nav_home: "首页",
    nav_products: "商城",
    nav_wholesale: "批发",
    nav_seller_center: "卖家中心",
    nav_about: "关于我们",
    nav_contact: "联系我们",
    nav_login: "登录",
    nav_register: "注册",
    language_label: "语言",
    footer_rights: "版权所有。",

    home_title: "面向消费者与采购商的一站式市场",
    home_subtitle: "零售购物，或以认证企业身份批量采购。",
    home_featured: "精选商品",
    home_categories: "按类别浏览",
    home_cta_retail: "开始购物",
    home_cta_wholesale: "企业批发采购",
    about_title: "关于贸易汇",
    about_body: "贸易汇以四种语言连接韩国制造商与全球消费者及企业采购商。",

    products_title: "全部商品",
    wholesale_title: "批发目录",
    wholesale_subtitle: "认证企业会员专享批量价格。",
    category_label: "类别",
    empty_listing: "暂无商品。",
    out_of_stock: "缺货",
    stock_label: "库存",
    moq_label: "最小起订量",
    view_details: "查看详情",

    spec_title: "规格参数",
    spec_size: "尺寸",
    spec_material: "材质",
    spec_colors: "颜色",
    spec_weight: "重量",
    spec_width: "宽度",
    price_label: "价格",
    usd_price_label: "美元价格",
    buy_now: "立即购买",
    request_quote: "申请报价",

    purchase_title: "结算",
    quantity_label: "数量",
    submit_purchase: "提交订单",
    purchase_done_title: "订单已提交",
    purchase_done_body: "谢谢！这是演示商店，不会实际发货。",
    order_number_label: "订单号",
    total_label: "合计",
    quote_title: "批发报价申请",
    company_label: "公司名称",
    email_label: "电子邮箱",
    message_label: "留言",
    submit_quote: "发送申请",
    quote_done_title: "报价申请已提交",
    quote_done_body: "批发团队将在两个工作日内通过邮件回复。",

    contact_title: "联系我们",
    name_label: "姓名",
    contact_submit: "发送留言",
    contact_done: "谢谢！我们已收到您的留言。",
    login_title: "登录",
    password_label: "密码",
    login_submit: "登录",

    register_title: "创建账户",
    register_choose: "您将如何使用贸易汇？",
    register_personal: "个人会员",
    register_personal_desc: "为自己购买零售商品。",
    register_business: "企业会员",
    register_business_desc: "批发采购并通过卖家中心销售。",
    password_confirm_label: "确认密码",
    business_number_label: "营业执照号",
    register_submit: "注册",
    register_pending_title: "注册申请已收到",
    register_pending_body: "您的企业资料正在审核中，认证通过后即可使用批发功能。",
    register_personal_done: "欢迎来到贸易汇！您的账户已就绪。",
    verification_status_label: "认证状态",
    user_type_label: "账户类型",
    status_pending: "审核中",
    status_verified: "已认证",
    status_rejected: "已驳回",
    status_unset: "未注册",
    user_type_business: "企业",
    user_type_personal: "个人",

    seller_title: "卖家中心",
    seller_overview: "概览",
    seller_products: "商品管理",
    seller_orders: "订单管理",
    seller_total_products: "在售商品",
    seller_low_stock: "库存不足",
    seller_wholesale_count: "批发商品",
    seller_order_status: "状态",
    seller_unverified_notice: "您的企业尚未通过认证，审核完成前无法进行批发采购。",
    order_status_paid: "已付款",
    order_status_shipped: "已发货",
    order_status_delivered: "已送达",

    denied_title: "访问受限",
    denied_wholesale_body: "批发目录仅对认证企业会员开放。",
    denied_seller_body: "卖家中心仅对企业会员开放。",
    cta_register_business: "注册企业会员",
    cta_go_retail: "前往零售商城",
    cta_login: "登录",
    cta_home: "返回首页",
    loading: "加载中…",
    deferred_noscript: "此区域需要启用 JavaScript 才能加载。",

    not_found_title: "页面未找到",
    not_found_body: "找不到您要查找的页面或商品。",

    chat_title: "在线客服",
    chat_open: "在线咨询",
    chat_close: "关闭",
    chat_placeholder: "可用任何语言输入消息…",
    chat_send: "发送",
    chat_greeting: "您好！请问有什么可以帮您？",
    chat_reply: "感谢您的咨询！客服人员将很快回复您。",
    chat_email_offer: "需要将对话记录发送到您的邮箱吗？",
    chat_email_send: "发送对话记录",
    chat_email_sent: "对话记录已发送至",
    chat_email_empty: "暂无可发送的对话。",

    mock_title: "演示账户状态",
    mock_body: "本商店没有真实账户。请选择访问控制使用的状态。",
    mock_submit: "应用",

    err_required: "此项为必填项。",
    err_email: "请输入有效的电子邮箱地址。",
    err_password_policy: "至少 8 个字符，且包含字母、数字和符号。",
    err_password_mismatch: "两次输入的密码不一致。",
    err_business_number: "请使用 000-00-00000 格式。",
    err_quantity_number: "请输入整数。",
    err_quantity_min: "数量不得少于",
    err_quantity_max: "数量不得超过",
};
