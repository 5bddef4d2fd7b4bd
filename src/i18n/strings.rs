/// All localized user-facing strings for a language
///
/// Strings are stored in their raw, display-ready form. An empty string
/// means the language does not localize that key; lookups resolve it
/// through the canonical (English) table instead.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Landing Page ====================
    /// Greeting shown on the landing page
    pub welcome: &'static str,

    /// One-line product tagline under the greeting
    pub tagline: &'static str,

    /// Label of the primary call-to-action button
    pub get_started: &'static str,

    /// Feature card title: messaging
    pub communication: &'static str,

    /// Feature card description: messaging
    pub communication_desc: &'static str,

    /// Feature card title: events
    pub events: &'static str,

    /// Feature card description: events
    pub events_desc: &'static str,

    /// Feature card title: student progress
    pub progress: &'static str,

    /// Feature card description: student progress
    pub progress_desc: &'static str,

    /// Label of the language picker
    pub select_language: &'static str,

    // ==================== Login Page ====================
    /// Heading of the login form
    pub welcome_back: &'static str,

    /// Instruction line under the login heading
    pub credentials: &'static str,

    /// Email field label
    pub email: &'static str,

    /// Password field label
    pub password: &'static str,

    /// "Forgot password?" link label
    pub forgot_password: &'static str,

    /// Submit button label
    pub sign_in: &'static str,

    /// Submit button label while the request is in flight
    pub signing_in: &'static str,

    /// Prompt shown to users without an account
    pub no_account: &'static str,

    /// Registration link label
    pub sign_up: &'static str,

    /// Role picker prompt ("I am a:")
    pub i_am_a: &'static str,

    /// Role option: parent
    pub parent: &'static str,

    /// Role option: teacher
    pub teacher: &'static str,

    // ==================== Common Terms ====================
    /// Link back to the login page
    pub back_to_login: &'static str,

    /// Validation: email missing
    pub email_required: &'static str,

    /// Validation: email malformed
    pub email_invalid: &'static str,

    /// Validation: password missing
    pub password_required: &'static str,

    /// Validation: password too short
    pub password_min_length: &'static str,

    // ==================== Messaging ====================
    /// Messaging page title
    pub messages: &'static str,

    /// Contact list card title
    pub contacts: &'static str,

    /// Contact list card subtitle
    pub select_teacher: &'static str,

    /// Presence label: online
    pub online: &'static str,

    /// Presence label: offline
    pub offline: &'static str,

    /// Presence label prefix for a last-seen timestamp
    pub last_seen: &'static str,

    /// Placeholder shown when no conversation is selected
    pub start_messaging: &'static str,

    /// Translation feature name
    pub translation: &'static str,

    /// Status word shown next to the translation indicator
    pub active: &'static str,

    /// Title of the simulated-translation notification
    pub message_translated: &'static str,

    /// Notification body prefix, followed by the source language name
    pub translated_from: &'static str,

    /// Connector between source and target language names ("to")
    pub translated_to: &'static str,

    /// Title of the notification shown when a translation language changes
    pub language_updated: &'static str,
}

/// Every translation key the app recognizes, in table order.
///
/// Used by the catalog validator and by fallback-completeness tests.
pub const ALL_KEYS: [&str; 40] = [
    "welcome",
    "tagline",
    "get_started",
    "communication",
    "communication_desc",
    "events",
    "events_desc",
    "progress",
    "progress_desc",
    "select_language",
    "welcome_back",
    "credentials",
    "email",
    "password",
    "forgot_password",
    "sign_in",
    "signing_in",
    "no_account",
    "sign_up",
    "i_am_a",
    "parent",
    "teacher",
    "back_to_login",
    "email_required",
    "email_invalid",
    "password_required",
    "password_min_length",
    "messages",
    "contacts",
    "select_teacher",
    "online",
    "offline",
    "last_seen",
    "start_messaging",
    "translation",
    "active",
    "message_translated",
    "translated_from",
    "translated_to",
    "language_updated",
];

impl LanguageStrings {
    /// Look up a translation key in this table.
    ///
    /// Returns `None` for unknown keys and for keys this language leaves
    /// empty (the caller resolves those through the canonical table).
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        let value = match key {
            "welcome" => self.welcome,
            "tagline" => self.tagline,
            "get_started" => self.get_started,
            "communication" => self.communication,
            "communication_desc" => self.communication_desc,
            "events" => self.events,
            "events_desc" => self.events_desc,
            "progress" => self.progress,
            "progress_desc" => self.progress_desc,
            "select_language" => self.select_language,
            "welcome_back" => self.welcome_back,
            "credentials" => self.credentials,
            "email" => self.email,
            "password" => self.password,
            "forgot_password" => self.forgot_password,
            "sign_in" => self.sign_in,
            "signing_in" => self.signing_in,
            "no_account" => self.no_account,
            "sign_up" => self.sign_up,
            "i_am_a" => self.i_am_a,
            "parent" => self.parent,
            "teacher" => self.teacher,
            "back_to_login" => self.back_to_login,
            "email_required" => self.email_required,
            "email_invalid" => self.email_invalid,
            "password_required" => self.password_required,
            "password_min_length" => self.password_min_length,
            "messages" => self.messages,
            "contacts" => self.contacts,
            "select_teacher" => self.select_teacher,
            "online" => self.online,
            "offline" => self.offline,
            "last_seen" => self.last_seen,
            "start_messaging" => self.start_messaging,
            "translation" => self.translation,
            "active" => self.active,
            "message_translated" => self.message_translated,
            "translated_from" => self.translated_from,
            "translated_to" => self.translated_to,
            "language_updated" => self.language_updated,
            _ => return None,
        };

        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

// ==================== English Strings ====================

/// English language strings (canonical). This table must have a value for
/// every key in `ALL_KEYS`.
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    // Landing page
    welcome: "Welcome to ParentConnect",
    tagline: "Bridging the gap between parents and teachers for better student success",
    get_started: "Get Started",
    communication: "Easy Communication",
    communication_desc: "Direct messaging between parents and teachers for seamless communication",
    events: "Event Management",
    events_desc: "Stay updated with school events and parent-teacher meetings",
    progress: "Student Progress",
    progress_desc: "Track your child's academic progress and achievements",
    select_language: "Select Language",

    // Login page
    welcome_back: "Welcome back",
    credentials: "Enter your credentials to access your account",
    email: "Email",
    password: "Password",
    forgot_password: "Forgot password?",
    sign_in: "Sign in",
    signing_in: "Signing in...",
    no_account: "Don't have an account?",
    sign_up: "Sign up",
    i_am_a: "I am a:",
    parent: "Parent",
    teacher: "Teacher",

    // Common terms
    back_to_login: "Back to login",
    email_required: "Email is required",
    email_invalid: "Email is invalid",
    password_required: "Password is required",
    password_min_length: "Password must be at least 6 characters",

    // Messaging
    messages: "Messages",
    contacts: "Contacts",
    select_teacher: "Select a teacher to message",
    online: "Online",
    offline: "Offline",
    last_seen: "Last seen",
    start_messaging: "Select a teacher to start messaging",
    translation: "Translation",
    active: "Active",
    message_translated: "Message Translated",
    translated_from: "Your message was automatically translated from",
    translated_to: "to",
    language_updated: "Language Updated",
};

// ==================== Spanish Strings ====================

/// Spanish language strings
pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    // Landing page
    welcome: "Bienvenido a ParentConnect",
    tagline: "Cerrando la brecha entre padres y maestros para un mejor éxito estudiantil",
    get_started: "Comenzar",
    communication: "Comunicación Fácil",
    communication_desc: "Mensajería directa entre padres y maestros para una comunicación fluida",
    events: "Gestión de Eventos",
    events_desc: "Mantente actualizado con los eventos escolares y reuniones de padres y maestros",
    progress: "Progreso del Estudiante",
    progress_desc: "Sigue el progreso académico y los logros de tu hijo",
    select_language: "Seleccionar Idioma",

    // Login page
    welcome_back: "Bienvenido de nuevo",
    credentials: "Ingrese sus credenciales para acceder a su cuenta",
    email: "Correo electrónico",
    password: "Contraseña",
    forgot_password: "¿Olvidó su contraseña?",
    sign_in: "Iniciar sesión",
    signing_in: "Iniciando sesión...",
    no_account: "¿No tiene una cuenta?",
    sign_up: "Registrarse",
    i_am_a: "Soy un:",
    parent: "Padre",
    teacher: "Maestro",

    // Common terms
    back_to_login: "Volver al inicio de sesión",
    email_required: "El correo electrónico es obligatorio",
    email_invalid: "El correo electrónico no es válido",
    password_required: "La contraseña es obligatoria",
    password_min_length: "La contraseña debe tener al menos 6 caracteres",

    // Messaging
    messages: "Mensajes",
    contacts: "Contactos",
    select_teacher: "Selecciona un maestro para enviar mensajes",
    online: "En línea",
    offline: "Desconectado",
    last_seen: "Última vez",
    start_messaging: "Selecciona un maestro para comenzar a chatear",
    translation: "Traducción",
    active: "Activa",
    message_translated: "Mensaje traducido",
    translated_from: "Tu mensaje fue traducido automáticamente de",
    translated_to: "a",
    language_updated: "Idioma actualizado",
};

// ==================== French Strings ====================

/// French language strings
pub const FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    // Landing page
    welcome: "Bienvenue à ParentConnect",
    tagline: "Combler le fossé entre les parents et les enseignants pour une meilleure réussite des élèves",
    get_started: "Commencer",
    communication: "Communication Facile",
    communication_desc: "Messagerie directe entre parents et enseignants pour une communication fluide",
    events: "Gestion des Événements",
    events_desc: "Restez informé des événements scolaires et des réunions parents-enseignants",
    progress: "Progrès de l'Élève",
    progress_desc: "Suivez les progrès académiques et les réalisations de votre enfant",
    select_language: "Choisir la Langue",

    // Login page
    welcome_back: "Bienvenue à nouveau",
    credentials: "Entrez vos identifiants pour accéder à votre compte",
    email: "E-mail",
    password: "Mot de passe",
    forgot_password: "Mot de passe oublié ?",
    sign_in: "Se connecter",
    signing_in: "Connexion en cours...",
    no_account: "Vous n'avez pas de compte ?",
    sign_up: "S'inscrire",
    i_am_a: "Je suis un(e) :",
    parent: "Parent",
    teacher: "Enseignant",

    // Common terms
    back_to_login: "Retour à la connexion",
    email_required: "L'e-mail est requis",
    email_invalid: "L'e-mail est invalide",
    password_required: "Le mot de passe est requis",
    password_min_length: "Le mot de passe doit comporter au moins 6 caractères",

    // Messaging
    messages: "Messages",
    contacts: "Contacts",
    select_teacher: "Sélectionnez un enseignant à contacter",
    online: "En ligne",
    offline: "Hors ligne",
    last_seen: "Vu pour la dernière fois",
    start_messaging: "Sélectionnez un enseignant pour commencer à discuter",
    translation: "Traduction",
    active: "Active",
    message_translated: "Message traduit",
    translated_from: "Votre message a été automatiquement traduit de",
    translated_to: "vers",
    language_updated: "Langue mise à jour",
};

// ==================== Chinese Strings ====================

/// Chinese language strings.
/// The messaging section is not yet localized and falls back to English.
pub const CHINESE_STRINGS: LanguageStrings = LanguageStrings {
    // Landing page
    welcome: "欢迎使用ParentConnect",
    tagline: "架起家长与教师之间的桥梁，促进学生更好地成功",
    get_started: "开始使用",
    communication: "便捷沟通",
    communication_desc: "家长和教师之间的直接消息传递，实现无缝沟通",
    events: "活动管理",
    events_desc: "随时了解学校活动和家长教师会议",
    progress: "学生进度",
    progress_desc: "跟踪孩子的学业进步和成就",
    select_language: "选择语言",

    // Login page
    welcome_back: "欢迎回来",
    credentials: "输入您的凭据以访问您的帐户",
    email: "电子邮件",
    password: "密码",
    forgot_password: "忘记密码？",
    sign_in: "登录",
    signing_in: "正在登录...",
    no_account: "没有帐户？",
    sign_up: "注册",
    i_am_a: "我是：",
    parent: "家长",
    teacher: "教师",

    // Common terms
    back_to_login: "返回登录",
    email_required: "电子邮件是必需的",
    email_invalid: "电子邮件无效",
    password_required: "密码是必需的",
    password_min_length: "密码必须至少有6个字符",

    // Messaging (pending localization)
    messages: "",
    contacts: "",
    select_teacher: "",
    online: "",
    offline: "",
    last_seen: "",
    start_messaging: "",
    translation: "",
    active: "",
    message_translated: "",
    translated_from: "",
    translated_to: "",
    language_updated: "",
};

// ==================== Arabic Strings ====================

/// Arabic language strings.
/// The messaging section is not yet localized and falls back to English.
pub const ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    // Landing page
    welcome: "مرحبًا بك في ParentConnect",
    tagline: "سد الفجوة بين الآباء والمعلمين لنجاح أفضل للطلاب",
    get_started: "البدء",
    communication: "تواصل سهل",
    communication_desc: "المراسلة المباشرة بين الآباء والمعلمين للتواصل السلس",
    events: "إدارة الفعاليات",
    events_desc: "ابق على اطلاع بأحداث المدرسة واجتماعات أولياء الأمور والمعلمين",
    progress: "تقدم الطالب",
    progress_desc: "تتبع التقدم الأكاديمي لطفلك وإنجازاته",
    select_language: "اختر اللغة",

    // Login page
    welcome_back: "مرحبًا بعودتك",
    credentials: "أدخل بيانات الاعتماد الخاصة بك للوصول إلى حسابك",
    email: "البريد الإلكتروني",
    password: "كلمة المرور",
    forgot_password: "نسيت كلمة المرور؟",
    sign_in: "تسجيل الدخول",
    signing_in: "جاري تسجيل الدخول...",
    no_account: "ليس لديك حساب؟",
    sign_up: "إنشاء حساب",
    i_am_a: "أنا:",
    parent: "ولي أمر",
    teacher: "معلم",

    // Common terms
    back_to_login: "العودة إلى تسجيل الدخول",
    email_required: "البريد الإلكتروني مطلوب",
    email_invalid: "البريد الإلكتروني غير صالح",
    password_required: "كلمة المرور مطلوبة",
    password_min_length: "يجب أن تتكون كلمة المرور من 6 أحرف على الأقل",

    // Messaging (pending localization)
    messages: "",
    contacts: "",
    select_teacher: "",
    online: "",
    offline: "",
    last_seen: "",
    start_messaging: "",
    translation: "",
    active: "",
    message_translated: "",
    translated_from: "",
    translated_to: "",
    language_updated: "",
};

// ==================== Hindi Strings ====================

/// Hindi language strings.
/// The messaging section is not yet localized and falls back to English.
pub const HINDI_STRINGS: LanguageStrings = LanguageStrings {
    // Landing page
    welcome: "ParentConnect में आपका स्वागत है",
    tagline: "बेहतर छात्र सफलता के लिए माता-पिता और शिक्षकों के बीच की दूरी को पाटना",
    get_started: "शुरू करें",
    communication: "आसान संचार",
    communication_desc: "निर्बाध संचार के लिए माता-पिता और शिक्षकों के बीच सीधा संदेश",
    events: "कार्यक्रम प्रबंधन",
    events_desc: "स्कूल के कार्यक्रमों और माता-पिता-शिक्षक बैठकों के बारे में अपडेट रहें",
    progress: "छात्र प्रगति",
    progress_desc: "अपने बच्चे की शैक्षणिक प्रगति और उपलब्धियों को ट्रैक करें",
    select_language: "भाषा चुनें",

    // Login page
    welcome_back: "वापसी पर स्वागत है",
    credentials: "अपने खाते तक पहुंचने के लिए अपने प्रमाण पत्र दर्ज करें",
    email: "ईमेल",
    password: "पासवर्ड",
    forgot_password: "पासवर्ड भूल गए?",
    sign_in: "साइन इन करें",
    signing_in: "साइन इन हो रहा है...",
    no_account: "खाता नहीं है?",
    sign_up: "साइन अप करें",
    i_am_a: "मैं एक हूँ:",
    parent: "अभिभावक",
    teacher: "शिक्षक",

    // Common terms
    back_to_login: "लॉगिन पर वापस जाएं",
    email_required: "ईमेल आवश्यक है",
    email_invalid: "ईमेल अमान्य है",
    password_required: "पासवर्ड आवश्यक है",
    password_min_length: "पासवर्ड कम से कम 6 अक्षरों का होना चाहिए",

    // Messaging (pending localization)
    messages: "",
    contacts: "",
    select_teacher: "",
    online: "",
    offline: "",
    last_seen: "",
    start_messaging: "",
    translation: "",
    active: "",
    message_translated: "",
    translated_from: "",
    translated_to: "",
    language_updated: "",
};

// ==================== Gujarati Strings ====================

/// Gujarati language strings.
/// The messaging section is not yet localized and falls back to English.
pub const GUJARATI_STRINGS: LanguageStrings = LanguageStrings {
    // Landing page
    welcome: "ParentConnect માં આપનું સ્વાગત છે",
    tagline: "વિદ્યાર્થીઓની સફળતા માટે માતાપિતા અને શિક્ષકો વચ્ચેના અંતરને ઘટાડવું",
    get_started: "શરૂ કરો",
    communication: "સરળ સંચાર",
    communication_desc: "માતાપિતા અને શિક્ષકો વચ્ચે સીધો સંદેશાવ્યવહાર",
    events: "કાર્યક્રમ વ્યવસ્થાપન",
    events_desc: "શાળાના કાર્યક્રમો અને વાલી-શિક્ષક બેઠકોથી અપડેટ રહો",
    progress: "વિદ્યાર્થી પ્રગતિ",
    progress_desc: "તમારા બાળકની શૈક્ષણિક પ્રગતિ અને સિદ્ધિઓને ટ્રેક કરો",
    select_language: "ભાષા પસંદ કરો",

    // Login page
    welcome_back: "પુનઃ સ્વાગત છે",
    credentials: "તમારા એકાઉન્ટમાં પ્રવેશ કરવા માટે તમારા પ્રમાણપત્રો દાખલ કરો",
    email: "ઇમેઇલ",
    password: "પાસવર્ડ",
    forgot_password: "પાસવર્ડ ભૂલી ગયા છો?",
    sign_in: "સાઇન ઇન કરો",
    signing_in: "સાઇન ઇન થઈ રહ્યું છે...",
    no_account: "એકાઉન્ટ નથી?",
    sign_up: "સાઇન અપ કરો",
    i_am_a: "હું છું:",
    parent: "વાલી",
    teacher: "શિક્ષક",

    // Common terms
    back_to_login: "લોગિન પર પાછા જાઓ",
    email_required: "ઇમેઇલ આવશ્યક છે",
    email_invalid: "ઇમેઇલ અમાન્ય છે",
    password_required: "પાસવર્ડ આવશ્યક છે",
    password_min_length: "પાસવર્ડ ઓછામાં ઓછા 6 અક્ષરનો હોવો જોઈએ",

    // Messaging (pending localization)
    messages: "",
    contacts: "",
    select_teacher: "",
    online: "",
    offline: "",
    last_seen: "",
    start_messaging: "",
    translation: "",
    active: "",
    message_translated: "",
    translated_from: "",
    translated_to: "",
    language_updated: "",
};
