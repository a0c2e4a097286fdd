//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::KeyBindings;
use crate::ui::Theme;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings, theme: &Theme) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let sections: [(&str, Vec<(String, &str)>); 4] = [
            (
                "Navegação",
                vec![
                    (format!("{}/↓", keys.down), "Descer"),
                    (format!("{}/↑", keys.up), "Subir"),
                    ("PgUp/PgDn".to_string(), "Página anterior/seguinte"),
                    ("Home/End".to_string(), "Início/fim"),
                    ("Tab".to_string(), "Próxima tela"),
                ],
            ),
            (
                "Telas",
                vec![
                    (keys.dashboard.clone(), "Dashboard"),
                    (keys.suggestions.clone(), "Palpites"),
                    (keys.history.clone(), "Histórico"),
                    (keys.checker.clone(), "Conferidor"),
                ],
            ),
            (
                "Ações",
                vec![
                    (keys.refresh.clone(), "Recarregar resultados"),
                    (keys.update.clone(), "Atualizar base (Dashboard)"),
                    (keys.generate.clone(), "Gerar palpites"),
                    (keys.copy.clone(), "Copiar palpite"),
                    (keys.search.clone(), "Buscar no histórico"),
                    (keys.edit.clone(), "Digitar números (Conferidor)"),
                    (
                        format!("{}/{}", keys.previous_contest, keys.next_contest),
                        "Trocar concurso",
                    ),
                    (keys.select.clone(), "Selecionar/conferir"),
                ],
            ),
            (
                "Geral",
                vec![
                    (keys.help.clone(), "Mostrar/ocultar ajuda"),
                    (keys.back.clone(), "Fechar aviso/cancelar edição"),
                    (keys.quit.clone(), "Sair"),
                ],
            ),
        ];

        let mut help_text = Vec::new();
        for (title, entries) in sections {
            if !help_text.is_empty() {
                help_text.push(Line::from(""));
            }
            help_text.push(Line::from(Span::styled(title, theme.heading())));
            for (key, description) in entries {
                help_text.push(Line::from(vec![
                    Span::styled(format!("  {:<10}", key), theme.heading()),
                    Span::raw(description),
                ]));
            }
        }

        let help = Paragraph::new(help_text).block(
            Block::default()
                .title(" Ajuda ")
                .borders(Borders::ALL)
                .border_style(theme.border_style(true)),
        );

        frame.render_widget(help, popup_area);
    }
}
