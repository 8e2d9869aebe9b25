//! Built-in showcase content.

use peaky_types::{CarouselError, Slide, SlideDeck, SlideId};

struct MockupEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    secondary_image: Option<&'static str>,
    features: [&'static str; 3],
}

const MOCKUPS: [MockupEntry; 4] = [
    MockupEntry {
        id: "dashboard",
        title: "Dashboard del Docente",
        description: "Vista completa del progreso de la clase con métricas en tiempo real",
        image: "/assets/blackBoardView.jpeg",
        secondary_image: Some("/assets/gamesView.jpeg"),
        features: [
            "Analíticas en tiempo real",
            "Gestión de estudiantes",
            "Configuración de lecciones",
        ],
    },
    MockupEntry {
        id: "game-interface",
        title: "Interfaz de Juego",
        description: "Experiencia inmersiva para estudiantes con mecánicas intuitivas",
        image: "/assets/mainView.jpeg",
        secondary_image: Some("/assets/gameView.jpeg"),
        features: ["Controles táctiles", "Feedback inmediato", "Progreso visual"],
    },
    MockupEntry {
        id: "analytics",
        title: "Analíticas Detalladas",
        description: "Reportes comprensivos sobre el desempeño y áreas de mejora",
        image: "/assets/feedBackView.jpeg",
        secondary_image: Some("/assets/blackBoardView.jpeg"),
        features: [
            "Reportes automáticos",
            "Insights pedagógicos",
            "Seguimiento longitudinal",
        ],
    },
    MockupEntry {
        id: "lesson-creator",
        title: "Creador de Lecciones IA",
        description: "Herramienta inteligente que convierte PDFs en experiencias gamificadas",
        image: "/assets/iaView.jpg",
        secondary_image: None,
        features: [
            "Procesamiento IA",
            "Adaptación automática",
            "Múltiples formatos",
        ],
    },
];

impl MockupEntry {
    fn to_slide(&self) -> Slide {
        Slide {
            id: SlideId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            image: self.image.to_string(),
            secondary_image: self.secondary_image.map(str::to_string),
            features: self.features.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

/// The product mockups shown in the "Producto en acción" showcase.
pub fn product_mockups() -> Result<SlideDeck, CarouselError> {
    SlideDeck::new(MOCKUPS.iter().map(MockupEntry::to_slide).collect())
}
