//! Lead-capture collections and the two row shapes the landing page submits.

/// Named collections a submission can target. Each one maps to a worksheet
/// title on the remote store and to a CSV file stem for the local fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Signups,
    CrewInterest,
}

impl Collection {
    /// Worksheet title on the remote store.
    pub fn title(&self) -> &'static str {
        match self {
            Collection::Signups => "Signups",
            Collection::CrewInterest => "Crew Interest",
        }
    }

    /// Column names, in row order.
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Collection::Signups => &["timestamp", "name", "email", "role", "intent", "area"],
            Collection::CrewInterest => &["timestamp", "name", "email", "skills", "hours"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    YoungProfessional,
    DigitalNomad,
    Tourist,
    Other,
}

impl Role {
    /// Convert a CLI code (or the full label) → enum, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "student" => Some(Role::Student),
            "professional" | "young professional" => Some(Role::YoungProfessional),
            "nomad" | "digital nomad" => Some(Role::DigitalNomad),
            "tourist" => Some(Role::Tourist),
            "other" => Some(Role::Other),
            _ => None,
        }
    }

    /// Label exactly as the signup form shows it.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::YoungProfessional => "Young professional",
            Role::DigitalNomad => "Digital nomad",
            Role::Tourist => "Tourist",
            Role::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    CentroSol,
    Chamberi,
    Malasana,
    Salamanca,
    Lavapies,
    Retiro,
    Anywhere,
}

impl Area {
    /// Convert a CLI code (or the full label) → enum, case-insensitive.
    /// Accented labels are accepted alongside their plain-ASCII codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "centro" | "sol" | "centro/sol" => Some(Area::CentroSol),
            "chamberi" | "chamberí" => Some(Area::Chamberi),
            "malasana" | "malasaña" => Some(Area::Malasana),
            "salamanca" => Some(Area::Salamanca),
            "lavapies" | "lavapiés" => Some(Area::Lavapies),
            "retiro" => Some(Area::Retiro),
            "anywhere" => Some(Area::Anywhere),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Area::CentroSol => "Centro/Sol",
            Area::Chamberi => "Chamberí",
            Area::Malasana => "Malasaña",
            Area::Salamanca => "Salamanca",
            Area::Lavapies => "Lavapiés",
            Area::Retiro => "Retiro",
            Area::Anywhere => "Anywhere",
        }
    }
}

/// What a signup is looking for. Multi-valued on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MakeFriends,
    Networking,
    LanguageExchange,
    ExploreCafes,
}

impl Intent {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "friends" | "make friends" => Some(Intent::MakeFriends),
            "networking" | "professional networking" => Some(Intent::Networking),
            "language" | "language exchange" => Some(Intent::LanguageExchange),
            "cafes" | "cafés" | "explore cafés" | "explore cafes" => Some(Intent::ExploreCafes),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intent::MakeFriends => "Make friends",
            Intent::Networking => "Professional networking",
            Intent::LanguageExchange => "Language exchange",
            Intent::ExploreCafes => "Explore cafés",
        }
    }
}

/// Skill areas offered on the founding-crew form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    UiUxDesign,
    ReactNative,
    WebDevelopment,
    BackendApis,
    EventOperations,
    DesignCanva,
    GrowthCommunity,
}

impl Skill {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "uiux" | "ui/ux" | "ui/ux design" => Some(Skill::UiUxDesign),
            "react" | "react native" => Some(Skill::ReactNative),
            "web" | "web development" => Some(Skill::WebDevelopment),
            "backend" | "backend/apis" => Some(Skill::BackendApis),
            "events" | "event operations" => Some(Skill::EventOperations),
            "design" | "design/canva" => Some(Skill::DesignCanva),
            "growth" | "growth/community" => Some(Skill::GrowthCommunity),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Skill::UiUxDesign => "UI/UX Design",
            Skill::ReactNative => "React Native",
            Skill::WebDevelopment => "Web Development",
            Skill::BackendApis => "Backend/APIs",
            Skill::EventOperations => "Event Operations",
            Skill::DesignCanva => "Design/Canva",
            Skill::GrowthCommunity => "Growth/Community",
        }
    }
}

/// Weekly availability bounds for crew interest (the form's slider range).
pub const MIN_WEEKLY_HOURS: u8 = 2;
pub const MAX_WEEKLY_HOURS: u8 = 20;
pub const DEFAULT_WEEKLY_HOURS: u8 = 6;

/// One early-access signup, as captured by the form.
#[derive(Debug, Clone)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub intent: Vec<Intent>,
    pub area: Option<Area>,
}

impl Signup {
    /// Field values in [`Collection::Signups`] header order. Name and email
    /// are trimmed; multi-valued intent is joined with `|`; absent role or
    /// area become empty fields.
    pub fn to_row(&self, timestamp: &str) -> Vec<String> {
        vec![
            timestamp.to_string(),
            self.name.trim().to_string(),
            self.email.trim().to_string(),
            self.role.map(|r| r.label().to_string()).unwrap_or_default(),
            self.intent
                .iter()
                .map(|i| i.label())
                .collect::<Vec<_>>()
                .join("|"),
            self.area.map(|a| a.label().to_string()).unwrap_or_default(),
        ]
    }
}

/// One founding-crew interest submission.
#[derive(Debug, Clone)]
pub struct CrewInterest {
    pub name: String,
    pub email: String,
    pub skills: Vec<Skill>,
    pub hours: u8,
}

impl CrewInterest {
    /// Field values in [`Collection::CrewInterest`] header order.
    pub fn to_row(&self, timestamp: &str) -> Vec<String> {
        vec![
            timestamp.to_string(),
            self.name.trim().to_string(),
            self.email.trim().to_string(),
            self.skills
                .iter()
                .map(|s| s.label())
                .collect::<Vec<_>>()
                .join("|"),
            self.hours.to_string(),
        ]
    }
}
