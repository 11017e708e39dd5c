//! Static content tables for the portfolio page.
//!
//! Everything here is fixed at compile time; components render these records
//! and never mutate them.

pub const DEVELOPER_NAME: &str = "Jonathan Cunto Diaz";
pub const DEVELOPER_TITLE: &str = "Frontend Developer";
pub const LOGO_INITIALS: &str = "JCD";
pub const HERO_SUMMARY: &str = "I create beautiful, responsive, and user-friendly web applications \
using modern technologies like React, TypeScript, and Tailwind CSS. \
Passionate about clean code and exceptional user experiences.";
pub const CONTACT_EMAIL: &str = "cnto.jnthn.97@gmail.com";
pub const CONTACT_LOCATION: &str = "Caracas, Venezuela";

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        href: "#home",
    },
    NavLink {
        label: "Skills",
        href: "#skills",
    },
    NavLink {
        label: "Projects",
        href: "#projects",
    },
    NavLink {
        label: "Experience",
        href: "#experience",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/jcunto2010",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/jonathan-cuntodiaz-41149a1bb",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "WhatsApp",
        href: "https://wa.me/584242572739",
        icon: "extra-whatsapp",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Language,
    Framework,
    Tool,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Language,
        SkillCategory::Framework,
        SkillCategory::Tool,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Language => "Languages",
            SkillCategory::Framework => "Frameworks & Libraries",
            SkillCategory::Tool => "Tools & Platforms",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub category: SkillCategory,
}

pub static SKILLS: [Skill; 17] = [
    // Languages
    Skill {
        name: "JavaScript",
        icon: "devicon-javascript-plain",
        category: SkillCategory::Language,
    },
    Skill {
        name: "TypeScript",
        icon: "devicon-typescript-plain",
        category: SkillCategory::Language,
    },
    Skill {
        name: "Dart",
        icon: "devicon-dart-plain",
        category: SkillCategory::Language,
    },
    Skill {
        name: "HTML5",
        icon: "devicon-html5-plain",
        category: SkillCategory::Language,
    },
    Skill {
        name: "CSS3",
        icon: "devicon-css3-plain",
        category: SkillCategory::Language,
    },
    // Frameworks & Libraries
    Skill {
        name: "React",
        icon: "devicon-react-original",
        category: SkillCategory::Framework,
    },
    Skill {
        name: "Next.js",
        icon: "devicon-nextjs-plain",
        category: SkillCategory::Framework,
    },
    Skill {
        name: "Flutter",
        icon: "devicon-flutter-plain",
        category: SkillCategory::Framework,
    },
    Skill {
        name: "Tailwind CSS",
        icon: "devicon-tailwindcss-original",
        category: SkillCategory::Framework,
    },
    Skill {
        name: "Vite",
        icon: "devicon-vitejs-plain",
        category: SkillCategory::Framework,
    },
    // Tools & Platforms
    Skill {
        name: "Firebase",
        icon: "devicon-firebase-plain",
        category: SkillCategory::Tool,
    },
    Skill {
        name: "Supabase",
        icon: "devicon-supabase-plain",
        category: SkillCategory::Tool,
    },
    Skill {
        name: "PostgreSQL",
        icon: "devicon-postgresql-plain",
        category: SkillCategory::Tool,
    },
    Skill {
        name: "Git",
        icon: "devicon-git-plain",
        category: SkillCategory::Tool,
    },
    Skill {
        name: "GitHub",
        icon: "devicon-github-plain",
        category: SkillCategory::Tool,
    },
    Skill {
        name: "Node.js",
        icon: "devicon-nodejs-plain",
        category: SkillCategory::Tool,
    },
    Skill {
        name: "Webpack",
        icon: "devicon-webpack-plain",
        category: SkillCategory::Tool,
    },
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub id: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub project: Option<&'static str>,
    pub technologies: &'static [&'static str],
}

pub static EXPERIENCES: [Experience; 3] = [
    Experience {
        id: "xmotics-cto",
        role: "CTO",
        company: "Xmotics",
        period: "Jan 2025 - Present",
        description: "Leading technical strategy and architecture for industrial automation \
platform. Currently developing roadmap for real-time monitoring dashboards and \
WebSocket-based live data visualization systems.",
        project: Some("xmotics"),
        technologies: &["React", "TypeScript", "Node.js", "MongoDB", "WebSocket", "Docker"],
    },
    Experience {
        id: "emprendia-director",
        role: "Director of Frontend Development & Co-Founder",
        company: "EmprendIA",
        period: "Aug 2024 - Present",
        description: "Co-founded and lead frontend architecture for multi-platform ecosystem \
connecting startups with investors. Built web dashboard with React and cross-platform \
mobile app with Flutter, including 10-step progressive registration flow.",
        project: Some("emprendia"),
        technologies: &["React", "TypeScript", "Flutter", "Supabase", "PostgreSQL", "Tailwind CSS"],
    },
    Experience {
        id: "reservo-founder",
        role: "Mobile Development Manager & Founder",
        company: "Reservo.AI",
        period: "Mar 2024 - Present",
        description: "Founded and lead mobile development for AI-powered appointment booking \
app. Integrated Google Gemini for conversational interface and implemented biometric \
authentication with Rive animations.",
        project: Some("reservo"),
        technologies: &["Flutter", "Firebase", "Gemini AI", "Riverpod", "Rive"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
    pub featured: bool,
}

pub static PROJECTS: [Project; 5] = [
    Project {
        id: "reservo",
        title: "Reservo.AI",
        description: "A multiplatform Flutter application for booking appointments with \
businesses across various industries. Features an AI assistant powered by Google Gemini \
for conversational booking, intelligent suggestions, and personalized reminders.",
        image: "/assets/projects/reservo-ai.jpg",
        technologies: &[
            "Flutter",
            "Dart",
            "Firebase",
            "Firestore",
            "Gemini AI",
            "Riverpod",
            "Rive Animations",
        ],
        demo_url: Some("#"),
        source_url: Some("#"),
        featured: true,
    },
    Project {
        id: "emprendia",
        title: "EmprendIA - Startup Registration Platform",
        description: "A comprehensive multi-actor platform for startup registration and \
management. Features a progressive 10-tab registration form, React web app, Flutter \
mobile app, and PostgreSQL database integration.",
        image: "/assets/projects/emprendia.jpg",
        technologies: &[
            "React",
            "TypeScript",
            "Flutter",
            "Dart",
            "PostgreSQL",
            "Supabase",
            "Tailwind CSS",
        ],
        demo_url: Some("#"),
        source_url: Some("#"),
        featured: true,
    },
    Project {
        id: "xmotics",
        title: "Xmotics Monitoring Platform",
        description: "Industrial automation dashboards with real-time telemetry over \
WebSocket, alerting, and historical trend views for plant operators.",
        image: "/assets/projects/xmotics.jpg",
        technologies: &["React", "TypeScript", "Node.js", "MongoDB", "WebSocket"],
        demo_url: None,
        source_url: None,
        featured: true,
    },
    Project {
        id: "rive-animations",
        title: "Animated Flutter App with Rive",
        description: "A Flutter application showcasing advanced animations using Rive: \
animated backgrounds with shapes and blur effects, animated buttons with loading states, \
and success animations with confetti.",
        image: "/assets/projects/rive-animation.jpg",
        technologies: &["Flutter", "Dart", "Rive", "Flutter SVG"],
        demo_url: Some("#"),
        source_url: Some("#"),
        featured: false,
    },
    Project {
        id: "weather-dashboard",
        title: "Weather Dashboard",
        description: "Interactive weather dashboard that displays current weather conditions \
and forecasts using external APIs with data visualizations.",
        image: "/assets/projects/weather.jpg",
        technologies: &["React", "JavaScript", "CSS", "REST API"],
        demo_url: Some("#"),
        source_url: Some("#"),
        featured: false,
    },
];

pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

/// Accent palette for a case-study section; the class mappings live with the
/// components that render them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Violet,
    Orange,
    Cyan,
}

#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct FlowStep {
    pub label: &'static str,
    pub description: &'static str,
    pub primary: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct OrbitItem {
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetLanguage {
    Dart,
    TypeScript,
    Text,
}

#[derive(Debug, Clone, Copy)]
pub struct Screen {
    pub label: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CodeSnippet {
    pub title: &'static str,
    pub caption: &'static str,
    pub language: SnippetLanguage,
    pub code: &'static str,
    pub highlight_lines: &'static [usize],
}

#[derive(Debug, Clone, Copy)]
pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge: &'static str,
    pub accent: Accent,
    pub intro: &'static str,
    pub role: &'static str,
    pub tech_line: &'static str,
    pub platform_line: &'static str,
    pub capabilities: &'static [&'static str],
    pub metrics: &'static [Metric],
    pub flow: &'static [FlowStep],
    pub orbit: &'static [OrbitItem],
    pub snippet: CodeSnippet,
    pub screens: &'static [Screen],
}

const RESERVO_SNIPPET: &str = r#"// Reservo.AI - Booking state with Riverpod
final bookingProvider = StateNotifierProvider<
  BookingNotifier, BookingState>((ref) {
  return BookingNotifier(ref.read(firestoreProvider));
});

class BookingNotifier extends StateNotifier<BookingState> {
  BookingNotifier(this._firestore) : super(BookingState.initial());

  final FirebaseFirestore _firestore;

  Future<void> bookSlot(String shopId, DateTime slot) async {
    state = state.copyWith(status: BookingStatus.loading);
    try {
      await _firestore.collection('bookings').add({
        'shopId': shopId,
        'slot': slot.toIso8601String(),
        'userId': ref.read(authProvider).uid,
      });
      state = state.copyWith(status: BookingStatus.success);
    } catch (e, st) {
      state = state.copyWith(status: BookingStatus.failure, error: e);
    }
  }
}"#;

const EMPRENDIA_SNIPPET: &str = r#"// EmprendIA - progressive registration wizard state
export function useRegistrationWizard(totalSteps: number) {
  const [step, setStep] = useState(0)
  const [draft, setDraft] = useState<StartupDraft>(emptyDraft)

  const advance = async (patch: Partial<StartupDraft>) => {
    const merged = { ...draft, ...patch }
    setDraft(merged)
    await supabase.from('startup_drafts').upsert(merged)
    setStep((s) => Math.min(s + 1, totalSteps - 1))
  }

  return { step, draft, advance }
}"#;

const XMOTICS_SNIPPET: &str = r#"// Xmotics - live telemetry channel subscription
export function subscribeTelemetry(plantId: string, onSample: SampleFn) {
  const socket = new WebSocket(`${WS_BASE}/plants/${plantId}`)
  socket.onmessage = (event) => {
    const sample = JSON.parse(event.data) as TelemetrySample
    if (sample.quality !== 'stale') {
      onSample(sample)
    }
  }
  return () => socket.close()
}"#;

pub static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        id: "reservo",
        title: "Reservo.AI",
        subtitle: "AI-powered appointment booking platform with conversational interface \
and biometric auth.",
        badge: "Mobile Application",
        accent: Accent::Violet,
        intro: "Reservo.AI is a multiplatform Flutter application designed to revolutionize \
appointment booking. Powered by Google Gemini, it enables conversational booking, \
intelligent suggestions, and personalized reminders.",
        role: "Full-stack development including UI/UX implementation, AI integration with \
Google Gemini, real-time data synchronization with Firebase, and state management with \
Riverpod.",
        tech_line: "Flutter · Firebase · Gemini AI · Riverpod · Rive",
        platform_line: "iOS & Android · Booking App",
        capabilities: &[
            "Real-time AI chat",
            "Biometric authentication",
            "Smart notifications",
            "Cross-platform",
            "Rive animations",
            "Lottie animated onboarding",
        ],
        metrics: &[
            Metric {
                value: "1",
                label: "Unified AI assistant",
                description: Some("Single conversational interface for booking and suggestions"),
            },
            Metric {
                value: "2",
                label: "Platforms (iOS & Android)",
                description: Some("Single Flutter codebase, native performance"),
            },
            Metric {
                value: "100%",
                label: "Biometric auth coverage",
                description: Some("Secure login and sensitive actions with Rive animations"),
            },
        ],
        flow: &[
            FlowStep {
                label: "Launch & Auth",
                description: "Splash, SignUp or Login.",
                primary: true,
            },
            FlowStep {
                label: "Main Dashboard",
                description: "Central hub for all features.",
                primary: false,
            },
            FlowStep {
                label: "AI Assistant",
                description: "Gemini-powered conversational booking.",
                primary: true,
            },
            FlowStep {
                label: "Booking Flow",
                description: "Search, service, time, confirm.",
                primary: false,
            },
            FlowStep {
                label: "Confirmation",
                description: "Review and reminders.",
                primary: true,
            },
        ],
        orbit: &[
            OrbitItem {
                label: "Flutter",
                icon: Some("devicon-flutter-plain"),
                color: "#02569B",
            },
            OrbitItem {
                label: "Firebase",
                icon: Some("devicon-firebase-plain"),
                color: "#FFCA28",
            },
            OrbitItem {
                label: "Gemini AI",
                icon: Some("devicon-google-plain"),
                color: "#8E75B2",
            },
        ],
        snippet: CodeSnippet {
            title: "State management: Riverpod",
            caption: "Booking flow and Firestore integration via StateNotifier; auth and \
firestore injected with ref.read.",
            language: SnippetLanguage::Dart,
            code: RESERVO_SNIPPET,
            highlight_lines: &[2, 3, 4, 15, 16],
        },
        screens: &[
            Screen {
                label: "Home",
                image: "/assets/case-studies/reservo/home.jpg",
            },
            Screen {
                label: "AI Chat",
                image: "/assets/case-studies/reservo/chat.jpg",
            },
            Screen {
                label: "Bookings",
                image: "/assets/case-studies/reservo/bookings.jpg",
            },
            Screen {
                label: "Profile",
                image: "/assets/case-studies/reservo/profile.jpg",
            },
        ],
    },
    CaseStudy {
        id: "emprendia",
        title: "EmprendIA",
        subtitle: "Multi-actor platform connecting startups with investors, incubators, \
and mentors.",
        badge: "Web & Mobile Platform",
        accent: Accent::Orange,
        intro: "EmprendIA brings the entrepreneurial ecosystem into one place: a React web \
dashboard and a Flutter companion app over a shared Supabase backend, with a progressive \
10-step registration flow that lets founders build their profile incrementally.",
        role: "Frontend architecture for web and mobile, the progressive registration \
wizard, and the shared data layer over Supabase with PostgreSQL row-level security.",
        tech_line: "React · TypeScript · Flutter · Supabase · PostgreSQL",
        platform_line: "Web & Mobile · Startup Ecosystem",
        capabilities: &[
            "10-step progressive registration",
            "Investor matching",
            "Multi-actor roles",
            "Draft autosave",
            "Shared web/mobile backend",
            "Responsive dashboard",
        ],
        metrics: &[
            Metric {
                value: "10",
                label: "Registration steps",
                description: Some("Progressive wizard with autosaved drafts at every step"),
            },
            Metric {
                value: "3",
                label: "Actor roles",
                description: Some("Startups, investors, and incubators on one platform"),
            },
            Metric {
                value: "2",
                label: "Clients, one backend",
                description: Some("React web and Flutter mobile over shared Supabase"),
            },
        ],
        flow: &[
            FlowStep {
                label: "Sign Up",
                description: "Pick a role: startup, investor, incubator.",
                primary: true,
            },
            FlowStep {
                label: "Progressive Profile",
                description: "10 steps, each autosaved as a draft.",
                primary: true,
            },
            FlowStep {
                label: "Review",
                description: "Validate and publish the profile.",
                primary: false,
            },
            FlowStep {
                label: "Match & Connect",
                description: "Browse and contact compatible actors.",
                primary: true,
            },
        ],
        orbit: &[
            OrbitItem {
                label: "React",
                icon: Some("devicon-react-original"),
                color: "#61DAFB",
            },
            OrbitItem {
                label: "Flutter",
                icon: Some("devicon-flutter-plain"),
                color: "#02569B",
            },
            OrbitItem {
                label: "Supabase",
                icon: Some("devicon-supabase-plain"),
                color: "#3ECF8E",
            },
            OrbitItem {
                label: "PostgreSQL",
                icon: Some("devicon-postgresql-plain"),
                color: "#336791",
            },
        ],
        snippet: CodeSnippet {
            title: "Progressive registration wizard",
            caption: "Each step merges its fields into the draft and persists it before \
advancing, so founders can leave and resume at any point.",
            language: SnippetLanguage::TypeScript,
            code: EMPRENDIA_SNIPPET,
            highlight_lines: &[6, 8, 9],
        },
        screens: &[
            Screen {
                label: "Dashboard",
                image: "/assets/case-studies/emprendia/dashboard.jpg",
            },
            Screen {
                label: "Wizard",
                image: "/assets/case-studies/emprendia/wizard.jpg",
            },
            Screen {
                label: "Matches",
                image: "/assets/case-studies/emprendia/matches.jpg",
            },
            Screen {
                label: "Profile",
                image: "/assets/case-studies/emprendia/profile.jpg",
            },
        ],
    },
    CaseStudy {
        id: "xmotics",
        title: "Xmotics",
        subtitle: "Real-time monitoring dashboards for industrial automation.",
        badge: "Industrial Platform",
        accent: Accent::Cyan,
        intro: "Xmotics turns raw plant telemetry into live dashboards: WebSocket channels \
stream samples from the floor into React views with alerting thresholds and historical \
trend charts backed by MongoDB.",
        role: "Technical strategy and architecture: the telemetry channel protocol, the \
dashboard component system, and the roadmap for live data visualization.",
        tech_line: "React · TypeScript · Node.js · MongoDB · WebSocket",
        platform_line: "Web · Industrial Automation",
        capabilities: &[
            "Live WebSocket telemetry",
            "Alerting thresholds",
            "Historical trends",
            "Operator dashboards",
            "Plant-level access control",
        ],
        metrics: &[
            Metric {
                value: "<1s",
                label: "Sample-to-screen latency",
                description: Some("Telemetry rendered as it arrives over the channel"),
            },
            Metric {
                value: "24/7",
                label: "Continuous monitoring",
                description: Some("Dashboards built for always-on control rooms"),
            },
            Metric {
                value: "1",
                label: "Unified data model",
                description: Some("Same sample schema across live and historical views"),
            },
        ],
        flow: &[
            FlowStep {
                label: "Connect Plant",
                description: "Register devices and channels.",
                primary: true,
            },
            FlowStep {
                label: "Stream Telemetry",
                description: "Samples arrive over WebSocket.",
                primary: false,
            },
            FlowStep {
                label: "Visualize",
                description: "Live dashboards and trend charts.",
                primary: true,
            },
            FlowStep {
                label: "Alert",
                description: "Threshold rules notify operators.",
                primary: false,
            },
        ],
        orbit: &[
            OrbitItem {
                label: "React",
                icon: Some("devicon-react-original"),
                color: "#61DAFB",
            },
            OrbitItem {
                label: "Node.js",
                icon: Some("devicon-nodejs-plain"),
                color: "#339933",
            },
            OrbitItem {
                label: "MongoDB",
                icon: Some("devicon-mongodb-plain"),
                color: "#47A248",
            },
        ],
        snippet: CodeSnippet {
            title: "Live telemetry subscription",
            caption: "A channel per plant; stale samples are dropped before they reach \
the view layer.",
            language: SnippetLanguage::TypeScript,
            code: XMOTICS_SNIPPET,
            highlight_lines: &[3, 6],
        },
        screens: &[
            Screen {
                label: "Overview",
                image: "/assets/case-studies/xmotics/overview.jpg",
            },
            Screen {
                label: "Live Channels",
                image: "/assets/case-studies/xmotics/channels.jpg",
            },
            Screen {
                label: "Trends",
                image: "/assets/case-studies/xmotics/trends.jpg",
            },
            Screen {
                label: "Alerts",
                image: "/assets/case-studies/xmotics/alerts.jpg",
            },
        ],
    },
];

pub fn case_study_by_id(id: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids<I: Iterator<Item = &'static str>>(ids: I, table: &str) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id:?} in {table}");
        }
    }

    #[test]
    fn test_ids_are_unique() {
        assert_unique_ids(PROJECTS.iter().map(|p| p.id), "PROJECTS");
        assert_unique_ids(CASE_STUDIES.iter().map(|c| c.id), "CASE_STUDIES");
        assert_unique_ids(EXPERIENCES.iter().map(|e| e.id), "EXPERIENCES");
    }

    #[test]
    fn test_experience_projects_resolve() {
        for exp in &EXPERIENCES {
            if let Some(project) = exp.project {
                assert!(
                    case_study_by_id(project).is_some(),
                    "experience {} links to unknown case study {project:?}",
                    exp.id
                );
                assert!(
                    project_by_id(project).is_some(),
                    "experience {} links to unknown project {project:?}",
                    exp.id
                );
            }
        }
    }

    #[test]
    fn test_nav_links_are_fragments() {
        for link in &NAV_LINKS {
            assert!(
                link.href.starts_with('#') && link.href.len() > 1,
                "nav link {:?} is not an in-page anchor",
                link.label
            );
            assert!(!link.label.is_empty());
        }
    }

    #[test]
    fn test_every_skill_category_is_populated() {
        for category in SkillCategory::ALL {
            assert!(
                skills_in(category).count() > 0,
                "no skills in category {category:?}"
            );
        }
        let categorized: usize = SkillCategory::ALL
            .into_iter()
            .map(|c| skills_in(c).count())
            .sum();
        assert_eq!(categorized, SKILLS.len());
    }

    #[test]
    fn test_featured_projects_each_have_a_case_study() {
        assert!(featured_projects().count() >= 1);
        // featured projects are exactly the ones shown as full case studies
        for project in featured_projects() {
            assert!(
                case_study_by_id(project.id).is_some(),
                "featured project {} has no case study",
                project.id
            );
        }
        for study in &CASE_STUDIES {
            let project = project_by_id(study.id)
                .unwrap_or_else(|| panic!("case study {} has no project record", study.id));
            assert!(project.featured);
        }
    }

    #[test]
    fn test_project_lookup() {
        assert!(project_by_id("reservo").is_some());
        assert!(project_by_id("does-not-exist").is_none());
    }

    #[test]
    fn test_case_studies_are_complete() {
        for study in &CASE_STUDIES {
            assert!(!study.flow.is_empty(), "{}: empty flow", study.id);
            assert!(!study.metrics.is_empty(), "{}: empty metrics", study.id);
            assert!(!study.orbit.is_empty(), "{}: empty orbit", study.id);
            assert!(!study.screens.is_empty(), "{}: empty screens", study.id);
            assert!(!study.snippet.code.is_empty(), "{}: empty snippet", study.id);
        }
    }

    #[test]
    fn test_snippet_highlights_are_in_range() {
        for study in &CASE_STUDIES {
            let lines = study.snippet.code.lines().count();
            for &line in study.snippet.highlight_lines {
                assert!(
                    line >= 1 && line <= lines,
                    "{}: highlight line {line} outside 1..={lines}",
                    study.id
                );
            }
        }
    }
}
