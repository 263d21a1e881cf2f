use gravitris_engine::{Game, GamePhase};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{BoardDisplay, PiecePreview, StatsDisplay, color, style};

/// The full game screen: stats panel, playfield, and next-piece preview,
/// with a banner overlay once the game ends.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    game: &'a Game,
    horizontal_padding: u16,
    vertical_padding: u16,
}

impl<'a> GameDisplay<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self {
            game,
            horizontal_padding: 1,
            vertical_padding: 0,
        }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = style::DEFAULT;
        let block_padding = Padding::symmetric(self.horizontal_padding, self.vertical_padding);
        let border_style = match self.game.phase() {
            GamePhase::Playing => color::WHITE,
            GamePhase::GameOver => color::RED,
        };

        let game_board = BoardDisplay::new(self.game.board())
            .falling_piece(self.game.current_piece())
            .block(Block::bordered().border_style(border_style).style(style));
        let next_panel = PiecePreview::new()
            .piece(self.game.next_piece().kind())
            .block(
                Block::bordered()
                    .title(Line::from("NEXT").centered())
                    .padding(block_padding)
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
        let game_stats = StatsDisplay::new(self.game.stats()).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(game_stats.width()),
            Constraint::Length(game_board.width()),
            Constraint::Length(next_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(game_stats.height())]).areas(left_column);
        let stats_area = stats_area.layout::<1>(
            &Layout::horizontal([Constraint::Length(game_stats.width())]).flex(Flex::End),
        )[0];

        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(center_column);

        let [next_area] =
            Layout::vertical([Constraint::Length(next_panel.height())]).areas(right_column);

        let game_board_width = game_board.width();
        game_stats.render(stats_area, buf);
        game_board.render(board_area, buf);
        next_panel.render(next_area, buf);

        if self.game.phase().is_game_over() {
            let style = Style::new().fg(color::WHITE).bg(color::RED);
            let block = Block::new().style(style);
            let text = Text::from(vec![
                Line::from("GAME OVER!!"),
                Line::from("Press R to Restart"),
            ])
            .style(style)
            .centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(4));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(2)), buf);
        }
    }
}
