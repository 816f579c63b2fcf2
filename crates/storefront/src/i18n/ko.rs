use super::Messages;

pub const MESSAGES: Messages = Messages {
    site_name: "TradeHub 트레이드허브",
    nav_home: "홈",
    nav_products: "쇼핑",
    nav_wholesale: "도매",
    nav_seller_center: "판매자 센터",
    nav_about: "회사 소개",
    nav_contact: "문의하기",
    nav_login: "로그인",
    nav_register: "회원가입",
    language_label: "언어",
    footer_rights: "모든 권리 보유.",

    home_title: "소비자와 바이어를 위한 하나의 마켓플레이스",
    home_subtitle: "소매로 쇼핑하거나, 인증된 사업자로 대량 구매하세요.",
    home_featured: "추천 상품",
    home_categories: "카테고리별 보기",
    home_cta_retail: "쇼핑 시작하기",
    home_cta_wholesale: "사업자 도매 구매",
    about_title: "트레이드허브 소개",
    about_body: "트레이드허브는 한국의 제조사와 전 세계 소비자 및 기업 바이어를 4개 언어로 연결합니다.",

    products_title: "전체 상품",
    wholesale_title: "도매 카탈로그",
    wholesale_subtitle: "인증된 사업자 회원 전용 대량 구매 가격.",
    category_label: "카테고리",
    empty_listing: "표시할 상품이 없습니다.",
    out_of_stock: "품절",
    stock_label: "재고",
    moq_label: "최소 주문 수량",
    view_details: "상세 보기",

    spec_title: "상품 사양",
    spec_size: "사이즈",
    spec_material: "소재",
    spec_colors: "색상",
    spec_weight: "무게",
    spec_width: "폭",
    price_label: "가격",
    usd_price_label: "달러 가격",
    buy_now: "바로 구매",
    request_quote: "견적 요청",

    purchase_title: "주문하기",
    quantity_label: "수량",
    submit_purchase: "주문 완료",
    purchase_done_title: "주문이 접수되었습니다",
    purchase_done_body: "감사합니다! 데모 스토어이므로 실제 배송은 진행되지 않습니다.",
    order_number_label: "주문 번호",
    total_label: "합계",
    quote_title: "도매 견적 요청",
    company_label: "회사명",
    email_label: "이메일",
    message_label: "메시지",
    submit_quote: "요청 보내기",
    quote_done_title: "견적이 요청되었습니다",
    quote_done_body: "도매 담당자가 영업일 기준 2일 이내에 이메일로 답변드립니다.",

    contact_title: "문의하기",
    name_label: "이름",
    contact_submit: "메시지 보내기",
    contact_done: "감사합니다! 메시지가 접수되었습니다.",
    login_title: "로그인",
    password_label: "비밀번호",
    login_submit: "로그인",

    register_title: "회원가입",
    register_choose: "트레이드허브를 어떻게 이용하시나요?",
    register_personal: "개인 회원",
    register_personal_desc: "소매 상품을 직접 구매합니다.",
    register_business: "사업자 회원",
    register_business_desc: "도매로 구매하고 판매자 센터에서 판매합니다.",
    password_confirm_label: "비밀번호 확인",
    business_number_label: "사업자 등록번호",
    register_submit: "가입하기",
    register_pending_title: "가입 신청이 접수되었습니다",
    register_pending_body: "사업자 서류를 검토 중입니다. 인증이 완료되면 도매 이용이 가능합니다.",
    register_personal_done: "트레이드허브에 오신 것을 환영합니다! 계정이 준비되었습니다.",
    verification_status_label: "인증 상태",
    user_type_label: "회원 유형",
    status_pending: "검토 중",
    status_verified: "인증 완료",
    status_rejected: "반려됨",
    status_unset: "미등록",
    user_type_business: "사업자",
    user_type_personal: "개인",

    seller_title: "판매자 센터",
    seller_overview: "개요",
    seller_products: "상품 관리",
    seller_orders: "주문 관리",
    seller_total_products: "등록 상품",
    seller_low_stock: "재고 부족",
    seller_wholesale_count: "도매 상품",
    seller_order_status: "상태",
    seller_unverified_notice: "사업자 인증이 아직 완료되지 않았습니다. 검토가 끝날 때까지 도매 구매는 제한됩니다.",
    order_status_paid: "결제 완료",
    order_status_shipped: "배송 중",
    order_status_delivered: "배송 완료",

    denied_title: "접근이 제한되었습니다",
    denied_wholesale_body: "도매 카탈로그는 인증된 사업자 회원만 이용할 수 있습니다.",
    denied_seller_body: "판매자 센터는 사업자 회원만 이용할 수 있습니다.",
    cta_register_business: "사업자 회원으로 가입",
    cta_go_retail: "소매 쇼핑으로 이동",
    cta_login: "로그인",
    cta_home: "홈으로",
    loading: "불러오는 중…",
    deferred_noscript: "이 영역을 불러오려면 JavaScript가 필요합니다.",

    not_found_title: "페이지를 찾을 수 없습니다",
    not_found_body: "요청하신 페이지나 상품을 찾을 수 없습니다.",

    chat_title: "실시간 상담",
    chat_open: "상담하기",
    chat_close: "닫기",
    chat_placeholder: "어떤 언어로든 메시지를 입력하세요…",
    chat_send: "보내기",
    chat_greeting: "안녕하세요! 무엇을 도와드릴까요?",
    chat_reply: "문의해 주셔서 감사합니다! 곧 상담원이 답변드리겠습니다.",
    chat_email_offer: "대화 내용을 이메일로 받아보시겠어요?",
    chat_email_send: "대화 내용 보내기",
    chat_email_sent: "대화 내용을 보냈습니다:",
    chat_email_empty: "아직 보낼 대화가 없습니다.",

    mock_title: "데모 계정 상태",
    mock_body: "이 스토어에는 실제 계정이 없습니다. 접근 제어에 사용할 상태를 선택하세요.",
    mock_submit: "적용",

    err_required: "필수 입력 항목입니다.",
    err_email: "올바른 이메일 주소를 입력하세요.",
    err_password_policy: "영문, 숫자, 특수문자를 포함해 8자 이상 입력하세요.",
    err_password_mismatch: "비밀번호가 일치하지 않습니다.",
    err_business_number: "000-00-00000 형식으로 입력하세요.",
    err_quantity_number: "정수를 입력하세요.",
    err_quantity_min: "최소 주문 수량:",
    err_quantity_max: "최대 주문 가능 수량:",
};
