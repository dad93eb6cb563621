use glam::DVec2;
use hecs::World;

use crate::{Arena, Ball, Config, Events, Paddle, Side};

/// Bounce the ball off the top and bottom walls
pub fn check_walls(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 {
            ball.pos.y = 0.0;
            ball.vel.y = ball.vel.y.abs();
            events.ball_hit_wall = true;
        }
        if ball.pos.y + config.ball_size >= arena.height {
            ball.pos.y = arena.height - config.ball_size;
            ball.vel.y = -ball.vel.y.abs();
            events.ball_hit_wall = true;
        }
        if events.ball_hit_wall {
            tracing::trace!(y = ball.pos.y, vy = ball.vel.y, "wall bounce");
        }
    }
}

/// Whether the ball touches the paddle on `side` while heading toward it
///
/// The horizontal test accepts a band one ball-size wide behind the paddle
/// face so a fast ball cannot skip through between frames.
pub fn touches_paddle(ball: &Ball, side: Side, paddle_y: f64, config: &Config, arena: &Arena) -> bool {
    let size = config.ball_size;
    let paddle_x = config.paddle_x(side, arena);
    let overlaps_y = ball.pos.y + size >= paddle_y && ball.pos.y <= paddle_y + config.paddle_height;

    match side {
        Side::Left => {
            ball.pos.x <= paddle_x + config.paddle_width
                && ball.pos.x >= paddle_x - size
                && overlaps_y
                && ball.vel.x < 0.0
        }
        Side::Right => {
            ball.pos.x + size >= paddle_x
                && ball.pos.x <= paddle_x + config.paddle_width
                && overlaps_y
                && ball.vel.x > 0.0
        }
    }
}

/// Ball state after striking the paddle on `side`
///
/// Sets the ball flush against the paddle face, adds speed up to the cap and
/// adds spin proportional to how far from the paddle centre it landed. The
/// returned velocity always has magnitude equal to the new speed.
pub fn resolve_paddle_hit(ball: &Ball, side: Side, paddle_y: f64, config: &Config, arena: &Arena) -> Ball {
    let paddle_x = config.paddle_x(side, arena);
    let x = match side {
        Side::Left => paddle_x + config.paddle_width,
        Side::Right => paddle_x - config.ball_size,
    };

    let half = config.paddle_height / 2.0;
    let offset = (ball.center_y(config.ball_size) - (paddle_y + half)) / half;

    let speed = (ball.speed() + config.ball_accel_on_hit).min(config.ball_speed_max);

    let vx = side.outward() * (speed * config.horizontal_share).max(config.min_horizontal_speed);
    let vy = (ball.vel.y + offset * config.spin_factor).clamp(-speed, speed);

    let raw = DVec2::new(vx, vy);
    let scale = speed / raw.length().max(1e-6);

    Ball::new(DVec2::new(x, ball.pos.y), raw * scale)
}

/// Detect and resolve ball hits on both paddles
pub fn check_paddles(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<(Side, f64)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            if touches_paddle(ball, side, paddle_y, config, arena) {
                let before = ball.speed();
                *ball = resolve_paddle_hit(ball, side, paddle_y, config, arena);
                events.ball_hit_paddle = true;
                tracing::debug!(
                    ?side,
                    speed_before = before,
                    speed_after = ball.speed(),
                    vy = ball.vel.y,
                    "paddle hit"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup() -> (World, Arena, Config, Events) {
        (World::new(), Arena::new(), Config::new(), Events::new())
    }

    fn ball_of(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball exists");
        *ball
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, arena, config, mut events) = setup();
        create_ball(&mut world, DVec2::new(400.0, -2.0), DVec2::new(4.0, -3.0));

        check_walls(&mut world, &arena, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.pos.y, 0.0, "Ball should be clamped to the wall");
        assert_eq!(ball.vel.y, 3.0, "Ball should head down");
        assert_eq!(ball.vel.x, 4.0, "X velocity should be unchanged");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, arena, config, mut events) = setup();
        create_ball(&mut world, DVec2::new(400.0, 495.0), DVec2::new(4.0, 3.0));

        check_walls(&mut world, &arena, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.pos.y, 488.0);
        assert_eq!(ball.vel.y, -3.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_wall_forces_direction_even_when_already_leaving() {
        let (mut world, arena, config, mut events) = setup();
        // Touching the top wall but already heading down: stays heading down
        create_ball(&mut world, DVec2::new(400.0, 0.0), DVec2::new(4.0, 2.0));

        check_walls(&mut world, &arena, &config, &mut events);

        assert_eq!(ball_of(&world).vel.y, 2.0);
    }

    #[test]
    fn test_no_wall_hit_midfield() {
        let (mut world, arena, config, mut events) = setup();
        create_ball(&mut world, DVec2::new(400.0, 200.0), DVec2::new(4.0, -2.0));

        check_walls(&mut world, &arena, &config, &mut events);

        assert!(!events.ball_hit_wall);
        assert_eq!(ball_of(&world).vel.y, -2.0);
    }

    #[test]
    fn test_touch_requires_approach() {
        let (arena, config) = (Arena::new(), Config::new());
        let approaching = Ball::new(DVec2::new(40.0, 240.0), DVec2::new(-4.0, 0.0));
        let leaving = Ball::new(DVec2::new(40.0, 240.0), DVec2::new(4.0, 0.0));

        assert!(touches_paddle(&approaching, Side::Left, 205.0, &config, &arena));
        assert!(!touches_paddle(&leaving, Side::Left, 205.0, &config, &arena));
    }

    #[test]
    fn test_touch_tolerance_band() {
        let (arena, config) = (Arena::new(), Config::new());
        let vel = DVec2::new(-4.0, 0.0);
        // Left paddle spans x 30..42; band reaches back to 18
        for x in [42.0, 30.0, 18.0] {
            let ball = Ball::new(DVec2::new(x, 240.0), vel);
            assert!(touches_paddle(&ball, Side::Left, 205.0, &config, &arena), "x = {x}");
        }
        let behind = Ball::new(DVec2::new(17.9, 240.0), vel);
        assert!(!touches_paddle(&behind, Side::Left, 205.0, &config, &arena));
        let short = Ball::new(DVec2::new(42.1, 240.0), vel);
        assert!(!touches_paddle(&short, Side::Left, 205.0, &config, &arena));
    }

    #[test]
    fn test_touch_needs_vertical_overlap() {
        let (arena, config) = (Arena::new(), Config::new());
        let vel = DVec2::new(4.0, 0.0);
        // Right paddle spans x 758..770
        let level = Ball::new(DVec2::new(750.0, 250.0), vel);
        let above = Ball::new(DVec2::new(750.0, 192.0), vel);
        let grazing_top = Ball::new(DVec2::new(750.0, 193.0), vel);
        let grazing_bottom = Ball::new(DVec2::new(750.0, 295.0), vel);

        assert!(touches_paddle(&level, Side::Right, 205.0, &config, &arena));
        assert!(!touches_paddle(&above, Side::Right, 205.0, &config, &arena));
        assert!(touches_paddle(&grazing_top, Side::Right, 205.0, &config, &arena));
        assert!(touches_paddle(&grazing_bottom, Side::Right, 205.0, &config, &arena));
    }

    #[test]
    fn test_centre_hit_speeds_up_without_spin() {
        let (arena, config) = (Arena::new(), Config::new());
        // ball centre 250 == paddle centre 250
        let ball = Ball::new(DVec2::new(40.0, 244.0), DVec2::new(-5.0, 0.0));

        let hit = resolve_paddle_hit(&ball, Side::Left, 205.0, &config, &arena);

        assert_eq!(hit.pos, DVec2::new(42.0, 244.0));
        assert!((hit.speed() - 5.35).abs() < 1e-9);
        assert!(hit.vel.x > 0.0);
        assert!(hit.vel.y.abs() < 1e-12);
    }

    #[test]
    fn test_offset_adds_spin_toward_impact_side() {
        let (arena, config) = (Arena::new(), Config::new());
        let below = Ball::new(DVec2::new(760.0, 280.0), DVec2::new(5.0, 0.0));
        let above = Ball::new(DVec2::new(760.0, 200.0), DVec2::new(5.0, 0.0));

        let low = resolve_paddle_hit(&below, Side::Right, 205.0, &config, &arena);
        let high = resolve_paddle_hit(&above, Side::Right, 205.0, &config, &arena);

        assert_eq!(low.pos.x, 746.0, "Flush against the right paddle face");
        assert!(low.vel.x < 0.0 && high.vel.x < 0.0);
        assert!(low.vel.y > 0.0);
        assert!(high.vel.y < 0.0);
    }

    #[test]
    fn test_spin_compounds_existing_vertical_velocity() {
        let (arena, config) = (Arena::new(), Config::new());
        let offset_pos = DVec2::new(40.0, 270.0);
        let flat = Ball::new(offset_pos, DVec2::new(-6.0, 0.0));
        let already_down = Ball::new(offset_pos, DVec2::new(-6.0, 2.0));

        let a = resolve_paddle_hit(&flat, Side::Left, 205.0, &config, &arena);
        let b = resolve_paddle_hit(&already_down, Side::Left, 205.0, &config, &arena);

        assert!(b.vel.y / b.vel.x > a.vel.y / a.vel.x);
    }

    #[test]
    fn test_speed_capped() {
        let (arena, config) = (Arena::new(), Config::new());
        let ball = Ball::new(DVec2::new(40.0, 244.0), DVec2::new(-12.9, 0.0));

        let hit = resolve_paddle_hit(&ball, Side::Left, 205.0, &config, &arena);
        assert!((hit.speed() - config.ball_speed_max).abs() < 1e-9);

        let again = resolve_paddle_hit(&hit, Side::Left, 205.0, &config, &arena);
        assert!((again.speed() - config.ball_speed_max).abs() < 1e-9);
    }

    #[test]
    fn test_slow_ball_keeps_minimum_horizontal_share() {
        let (arena, config) = (Arena::new(), Config::new());
        // Extreme edge hit on a slow ball: vertical clamps to speed, then rescale
        let ball = Ball::new(DVec2::new(40.0, 290.0), DVec2::new(-1.0, 3.0));

        let hit = resolve_paddle_hit(&ball, Side::Left, 205.0, &config, &arena);

        assert!(hit.vel.x > 0.0);
        assert!((hit.speed() - (ball.speed() + config.ball_accel_on_hit)).abs() < 1e-9);
    }

    #[test]
    fn test_bottom_edge_graze_offset_exceeds_one() {
        let (arena, config) = (Arena::new(), Config::new());
        // ball centre 301, paddle centre 250: offset 51/45 is kept as is
        let ball = Ball::new(DVec2::new(40.0, 295.0), DVec2::new(-5.0, 0.0));

        let hit = resolve_paddle_hit(&ball, Side::Left, 205.0, &config, &arena);

        let expected = (51.0 / 45.0 * 4.0) / (5.35 * 0.7);
        let ratio = hit.vel.y / hit.vel.x;
        assert!((ratio - expected).abs() < 1e-9, "ratio {ratio}, expected {expected}");
    }

    #[test]
    fn test_check_paddles_updates_ball() {
        let (mut world, arena, config, mut events) = setup();
        create_paddle(&mut world, Side::Left, 205.0);
        create_paddle(&mut world, Side::Right, 205.0);
        create_ball(&mut world, DVec2::new(35.0, 244.0), DVec2::new(-5.0, 0.0));

        check_paddles(&mut world, &arena, &config, &mut events);

        let ball = ball_of(&world);
        assert!(events.ball_hit_paddle);
        assert_eq!(ball.pos.x, 42.0);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_check_paddles_misses_when_paddle_elsewhere() {
        let (mut world, arena, config, mut events) = setup();
        create_paddle(&mut world, Side::Left, 0.0);
        create_ball(&mut world, DVec2::new(35.0, 400.0), DVec2::new(-5.0, 0.0));

        check_paddles(&mut world, &arena, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert_eq!(ball_of(&world).vel.x, -5.0);
    }
}
