// "Secret tools" section: the tool cards and the rotating developer joke box

use std::time::{Duration, Instant};

use egui::Color32;
use log::debug;
use rand::Rng;

use crate::schedule::IntervalTimer;

/// Delay between two tool cards appearing.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(200);
/// How often the joke box picks a new joke on its own.
pub const JOKE_INTERVAL: Duration = Duration::from_secs(20);
/// Chance that a refresh picks a code joke rather than a text joke.
pub const CODE_JOKE_PROBABILITY: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tool {
    pub name: &'static str,
    pub color: Color32,
    pub link: &'static str,
    pub caption: &'static str,
}

pub const TOOLS: [Tool; 6] = [
    Tool {
        name: "Google",
        color: Color32::from_rgb(0x42, 0x85, 0xF4),
        link: "https://www.google.com",
        caption: "For when I don't know how to center a div but I'm still a developer. Fake it till you Google it!",
    },
    Tool {
        name: "YouTube",
        color: Color32::from_rgb(0xFF, 0x00, 0x00),
        link: "https://www.youtube.com",
        caption: "My university! Key seminars include \"Cats playing piano\" and \"CSS tricks at 3 a.m.\".",
    },
    Tool {
        name: "Stack Overflow",
        color: Color32::from_rgb(0xF4, 0x80, 0x24),
        link: "https://stackoverflow.com",
        caption: "My therapy place, where code is cried over and celebrated. Motto: copy, paste, pray it works!",
    },
    Tool {
        name: "GitHub",
        color: Color32::from_rgb(0xFF, 0xFF, 0xFF),
        link: "https://github.com",
        caption: "My digital diary, full of half-finished projects and overconfident commits at 2 a.m.",
    },
    Tool {
        name: "ChatGPT",
        color: Color32::from_rgb(0x10, 0xA3, 0x7F),
        link: "https://chat.openai.com",
        caption: "My virtual colleague who never calls in sick but sometimes hallucinates. Works best with coffee (for me, not for it).",
    },
    Tool {
        name: "Claude",
        color: Color32::from_rgb(0x8A, 0x3F, 0xFC),
        link: "https://claude.ai",
        caption: "My AI friend with a philosophy degree. Solves complex problems, stumbles over simple arithmetic.",
    },
];

const TEXT_JOKES: [&str; 15] = [
    "Why do developers code at night? Because that's when the bugs are asleep!",
    "What do you call a developer who never checks Stack Overflow? Unemployed.",
    "All the code works on my machine, so I'm shipping my laptop to the client!",
    "Why do programmers prefer dark themes? Because bugs are attracted to light!",
    "I don't need a therapist, I have console.log().",
    "It works? Don't touch it! Why does it work? Don't touch that either!",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem!",
    "A SQL query walks into a bar, sees two tables and asks: 'Can I JOIN you?'",
    "There are 10 kinds of people: those who understand binary and those who don't.",
    "Debugging is like being the detective in a crime movie where you are also the murderer.",
    "The two hardest things in programming: cache invalidation, naming things and off-by-one errors.",
    "Programming is like a tattoo: one mistake and you're stuck with it for years.",
    "A QA tester walks into a bar. Walks into a bar. Walks into a bar. Walks into a bar...",
    "What is an algorithm? A word developers use when they don't want to explain what they did.",
    "Why are programmers bad at small talk? They always expect a return value.",
];

const CODE_JOKES: [&str; 8] = [
    "function getRandomNumber() {\n  // guaranteed to be random\n  return 4; // chosen by fair dice roll\n}",
    "// Yo dawg, I heard you liked recursion...\n\n# To understand recursion, see the bottom of this file.\n...\n...\n# To understand recursion, see the top of this file.",
    "try {\n  coffee.drink();\n  code.write();\n} catch (NoCoffeeError) {\n  developer.scream();\n  process.exit(1); // emergency\n}",
    "if (sad() === true) {\n  sad.stop();\n  beAwesome();\n}",
    "// Programmer dictionary:\n'It should work' = 'I haven't tested it'\n'Cannot reproduce' = 'Works on my machine'\n'Small fix' = 'I rewrote 400 lines'",
    "// TODO: remove this comment later (2014)\n// FIXME (2018): still not fixed\n// FIXME (2021): ok, maybe later...\n// FIXME (2023): it's a feature now",
    "// copied from github.com/your-crush\nfunction whatIsLove() {\n  const baby = \"Don't hurt me\";\n  // Don't hurt me\n  return \"No more\";\n}",
    "// 99 little bugs in the code\n// 99 little bugs\n// Take one down, patch it around\n// 127 little bugs in the code",
];

/// Number of tool cards visible `elapsed` after the section was first shown.
/// Card `i` appears at `i * REVEAL_STAGGER`.
pub fn revealed_tools(elapsed: Duration) -> usize {
    let staggers = elapsed.as_nanos() / REVEAL_STAGGER.as_nanos();
    usize::try_from(staggers)
        .unwrap_or(usize::MAX)
        .saturating_add(1)
        .min(TOOLS.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joke {
    Text(&'static str),
    /// Shown as a code block
    Code(&'static str),
}

impl Joke {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(CODE_JOKE_PROBABILITY) {
            Joke::Code(CODE_JOKES[rng.random_range(0..CODE_JOKES.len())])
        } else {
            Joke::Text(TEXT_JOKES[rng.random_range(0..TEXT_JOKES.len())])
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Joke::Text(text) | Joke::Code(text) => text,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Joke::Code(_))
    }
}

/// Joke box that rotates its joke every `JOKE_INTERVAL` and on demand.
#[derive(Debug, Clone)]
pub struct JokeBox {
    current: Joke,
    refresh: IntervalTimer,
}

impl JokeBox {
    pub fn new<R: Rng>(now: Instant, rng: &mut R) -> Self {
        let mut refresh = IntervalTimer::new(JOKE_INTERVAL);
        refresh.start(now);
        Self {
            current: Joke::random(rng),
            refresh,
        }
    }

    pub fn current(&self) -> Joke {
        self.current
    }

    /// Picks a new joke right away. The automatic rotation keeps its rhythm.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.current = Joke::random(rng);
    }

    /// Rotates the joke if the interval passed, once however many intervals
    /// were missed. Returns the time until the next rotation.
    pub fn advance<R: Rng>(&mut self, now: Instant, rng: &mut R) -> Option<Duration> {
        let due = self.refresh.due_ticks(now);
        if due > 0 {
            debug!("Rotating developer joke after {} interval(s)", due);
            self.shuffle(rng);
        }
        self.refresh.until_next(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_tools_reveal_one_by_one() {
        assert_eq!(revealed_tools(Duration::ZERO), 1);
        assert_eq!(revealed_tools(Duration::from_millis(199)), 1);
        assert_eq!(revealed_tools(Duration::from_millis(200)), 2);
        assert_eq!(revealed_tools(Duration::from_millis(1000)), 6);
        assert_eq!(revealed_tools(Duration::from_secs(3600)), TOOLS.len());
    }

    #[test]
    fn test_code_jokes_are_picked_most_of_the_time() {
        let mut rng = StdRng::seed_from_u64(3);
        let draws = 2000;
        let code = (0..draws)
            .filter(|_| Joke::random(&mut rng).is_code())
            .count();
        let share = code as f64 / draws as f64;
        assert!((0.65..0.75).contains(&share), "code joke share {}", share);
    }

    #[test]
    fn test_jokes_come_from_the_lists() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            match Joke::random(&mut rng) {
                Joke::Code(text) => assert!(CODE_JOKES.contains(&text)),
                Joke::Text(text) => assert!(TEXT_JOKES.contains(&text)),
            }
        }
    }

    #[test]
    fn test_joke_box_rotates_every_interval() {
        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(5);
        let mut jokes = JokeBox::new(t0, &mut rng);
        let first = jokes.current();

        assert_eq!(
            jokes.advance(t0 + Duration::from_secs(19), &mut rng),
            Some(Duration::from_secs(1))
        );
        assert_eq!(jokes.current(), first);

        // jokes can repeat, so predict the draw from a copy of the rng
        let mut expected_rng = rng.clone();
        let expected = Joke::random(&mut expected_rng);
        assert_eq!(
            jokes.advance(t0 + JOKE_INTERVAL, &mut rng),
            Some(JOKE_INTERVAL)
        );
        assert_eq!(jokes.current(), expected);

        // a long pause rotates only once
        let mut expected_rng = rng.clone();
        let expected = Joke::random(&mut expected_rng);
        jokes.advance(t0 + JOKE_INTERVAL * 5, &mut rng);
        assert_eq!(jokes.current(), expected);
        assert_eq!(
            Joke::random(&mut rng),
            Joke::random(&mut expected_rng)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_reveal_never_shrinks(a in 0u64..5_000, b in 0u64..5_000) {
            let (early, late) = (a.min(b), a.max(b));
            prop_assert!(
                revealed_tools(Duration::from_millis(early))
                    <= revealed_tools(Duration::from_millis(late))
            );
            prop_assert!(revealed_tools(Duration::from_millis(late)) <= TOOLS.len());
        }
    }
}
