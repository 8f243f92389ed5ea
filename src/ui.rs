use keyrush::session::{Feedback, Phase};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = self.engine.session();
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);

        let current_style = Style::default()
            .patch(red_bold_style)
            .add_modifier(Modifier::UNDERLINED);

        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(2), // heading
                Constraint::Length(2), // sequence
                Constraint::Length(1), // countdown
                Constraint::Length(2), // feedback
                Constraint::Min(0),    // results
                Constraint::Length(1), // legend
            ])
            .split(area);

        Paragraph::new(Span::styled("Type the sequence:", bold_style))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        let spans = session
            .sequence
            .chars()
            .iter()
            .enumerate()
            .flat_map(|(idx, c)| {
                let style = if idx < session.current_index {
                    green_bold_style
                } else if idx == session.current_index && session.phase != Phase::Won {
                    current_style
                } else {
                    dim_bold_style
                };
                [Span::styled(c.to_string(), style), Span::raw(" ")]
            })
            .collect::<Vec<Span>>();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        Paragraph::new(Span::styled(
            format!("Time left: {} seconds", session.time_left),
            dim_bold_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

        let feedback = match session.feedback {
            Feedback::None => Span::raw(""),
            Feedback::Correct => Span::styled("Correct!", green_bold_style),
            Feedback::Wrong => Span::styled("Wrong!", red_bold_style),
        };
        Paragraph::new(feedback)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        let legend = if session.is_over() {
            "(r)estart / (esc)ape"
        } else {
            "(esc)ape"
        };

        if session.is_over() {
            let banner_style = if session.phase == Phase::Won {
                green_bold_style
            } else {
                red_bold_style
            };

            let mut lines = vec![
                Line::from(Span::styled(session.outcome_message.clone(), banner_style)),
                Line::from(Span::styled(
                    format!("Your score: {}", session.score),
                    bold_style,
                )),
                Line::from(""),
                Line::from(Span::styled("Ranking:", bold_style)),
            ];

            let ranking = self.engine.ranking();
            if let Some(best) = ranking.best() {
                lines.insert(
                    2,
                    Line::from(Span::styled(
                        format!("Best this session: {}", best.score),
                        italic_style,
                    )),
                );
            }
            if ranking.is_empty() {
                lines.push(Line::from(Span::styled("no wins yet", italic_style)));
            } else {
                lines.extend(ranking.view().into_iter().map(|entry| {
                    Line::from(format!("{}: {} points", entry.timestamp_iso(), entry.score))
                }));
            }

            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title("Game over"))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(chunks[4], buf);
        }

        Paragraph::new(Span::styled(legend, italic_style)).render(chunks[5], buf);
    }
}
