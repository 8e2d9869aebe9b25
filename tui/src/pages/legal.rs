//! Static legal pages rendered inside the chrome.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Wrap},
};

use crate::theme::{Glyphs, Palette, styles};

pub(super) struct LegalPage {
    title: &'static str,
    intro: &'static str,
    sections: &'static [Section],
}

struct Section {
    heading: &'static str,
    items: &'static [&'static str],
}

pub(super) const PRIVACY: LegalPage = LegalPage {
    title: "Política de privacidad",
    intro: "En Peaky cuidamos los datos de cada alumno. Esta política explica qué \
            información recopilamos y cómo la usamos.",
    sections: &[
        Section {
            heading: "Información que recopilamos",
            items: &[
                "Datos de la cuenta: nombre, correo electrónico y curso.",
                "Progreso de aprendizaje: lecciones completadas, rachas y puntos.",
                "Datos técnicos básicos para que la aplicación funcione.",
            ],
        },
        Section {
            heading: "Cómo usamos la información",
            items: &[
                "Personalizar las lecciones y el ritmo de estudio.",
                "Mostrar estadísticas a docentes del mismo curso.",
                "Nunca vendemos tus datos a terceros.",
            ],
        },
    ],
};

pub(super) const DELETE_ACCOUNT: LegalPage = LegalPage {
    title: "Eliminar cuenta",
    intro: "Podés solicitar la eliminación definitiva de tu cuenta de Peaky en \
            cualquier momento.",
    sections: &[
        Section {
            heading: "Cómo solicitarlo",
            items: &[
                "Desde la aplicación: Perfil > Configuración > Eliminar cuenta.",
                "Por correo, escribiendo desde la dirección asociada a la cuenta.",
            ],
        },
        Section {
            heading: "Qué se elimina",
            items: &[
                "Tu perfil, progreso, rachas y logros.",
                "La eliminación se completa dentro de los 30 días.",
            ],
        },
    ],
};

pub(super) const DELETE_DATA: LegalPage = LegalPage {
    title: "Eliminar datos",
    intro: "Si querés conservar tu cuenta pero borrar parte de tu información, \
            podés pedir la eliminación de datos específicos.",
    sections: &[Section {
        heading: "Datos que podés eliminar",
        items: &[
            "Historial de lecciones y respuestas.",
            "Estadísticas de uso y actividad.",
            "Preferencias guardadas.",
        ],
    }],
};

pub(super) fn draw(
    frame: &mut Frame,
    page: &LegalPage,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut lines = vec![
        Line::from(Span::styled(page.title, styles::heading(palette))),
        Line::from(""),
        Line::from(Span::styled(page.intro, styles::body(palette))),
    ];

    for section in page.sections {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            section.heading,
            Style::default().fg(palette.primary),
        )));
        for item in section.items {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", glyphs.bullet), Style::default().fg(palette.accent)),
                Span::styled(*item, Style::default().fg(palette.text_primary)),
            ]));
        }
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
