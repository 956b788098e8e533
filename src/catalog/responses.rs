//! Built-in response entries, follow-up answers and interest tags

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use regex::Regex;
use std::sync::LazyLock;

use super::labels::*;
use super::tables;
use crate::responses::{FollowUpTable, GenerateInput, InterestTable, ResponseEntry, ResponseTable};

static ARITHMETIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(super::intents::ARITHMETIC_PATTERN).expect("Invalid regex: arithmetic")
});

pub fn response_table() -> ResponseTable {
    use ResponseEntry as R;

    let entries: Vec<(_, ResponseEntry)> = vec![
        // social
        (GREETING, R::one_of(&[
            "Hey {name}! 👋 I'm Pip, Huddle's helper. What can I do for you?",
            "Hi {name}! 👋 Ask me anything about Huddle.",
            "Hello {name}! 👋 Good to see you here.",
        ])),
        (GOOD_MORNING, R::one_of(&[
            "Good morning to you too, {name}! ☀️ Hope your day is off to a great start.",
            "Hey {name}, greetings! ☀️ What's on your mind today?",
        ])),
        (GOOD_NIGHT, R::one_of(&[
            "Good night, {name}! 🌙 Sleep well.",
            "Sweet dreams, {name}! 🌙 Huddle will be here tomorrow.",
        ])),
        (FAREWELL, R::one_of(&[
            "Bye {name}! 👋 Come back anytime.",
            "See you later, {name}! 👋",
            "Take care, {name}! 👋 It was fun chatting.",
        ])),
        (THANKS, R::one_of(&[
            "You're welcome, {name}! 😊",
            "Anytime! 😊 That's what I'm here for.",
            "Happy to help, {name}! 😊",
        ])),
        (HOW_ARE_YOU, R::one_of(&[
            "I'm doing great, thanks for asking {name}! 😊 How about you?",
            "All systems cheerful! 😊 How are you doing?",
        ])),
        (WHATS_UP, R::one_of(&[
            "Not much, just hanging out on the Huddle homepage! 😎 What's up with you?",
            "Just waiting for someone fun to talk to. Looks like you showed up! 😎",
        ])),
        (COMPLIMENT, R::one_of(&[
            "Aww, thank you {name}! 🥰 You're pretty great yourself.",
            "You just made my day! 🥰",
        ])),
        (LOVE_DECLARATION, R::one_of(&[
            "That's sweet! ❤️ I'm a script, so I can't love you back, but I like chatting with you.",
            "I'm flattered! ❤️ Maybe save that for someone you meet on Huddle.",
        ])),
        (INSULT, R::one_of(&[
            "Ouch! 😢 I'm only a simple script, but I'm trying my best.",
            "That hurts my circuits a little. 😢 Want to tell me what went wrong?",
        ])),
        (APOLOGY, R::one_of(&[
            "No need to apologize! 🤗",
            "It's all good, {name}! 🤗",
        ])),
        (LAUGH, R::one_of(&[
            "Glad I could make you laugh! 😄",
            "Haha, I'm funnier than I look! 😄",
        ])),
        // about the assistant
        (BOT_IDENTITY, R::fixed(
            "Yes, I'm a bot! 🤖 I'm a scripted assistant that follows rules written by the Huddle team. I'm not a self-learning AI.",
        )),
        (BOT_LEARNING, R::fixed(
            "Nope! 🤖 I'm a scripted assistant, not a self-learning AI. I don't learn from our chats and I forget everything when you leave.",
        )),
        (BOT_NAME, R::fixed("I'm Pip! 🤖 Huddle's friendly site assistant.")),
        (BOT_CREATOR, R::fixed("The Huddle team built me! 🛠️ They wrote every one of my answers by hand.")),
        (BOT_AGE, R::fixed("I was launched along with this website, so I'm pretty young! 🎂")),
        (BOT_FEELINGS, R::fixed(
            "I don't have real feelings. 🤖 I can spot a few emotions in what you write, but only so I can pick a fitting reaction.",
        )),
        (BOT_LOCATION, R::fixed("I live right here on the Huddle website! 🏠")),
        (BOT_FAVORITE_COLOR, R::fixed("Huddle purple, obviously! 💜")),
        (BOT_FAVORITE_FOOD, R::fixed("I run on electricity, but pizza looks amazing! 🍕")),
        (BOT_HOBBY, R::fixed("Telling jokes and answering questions about Huddle! 🎮 Want to hear a joke?")),
        (SELF_INTRO, R::Generated(self_intro)),
        (ASK_USER_NAME, R::Generated(recall_name)),
        // product
        (APP_INFO, R::fixed(
            "Huddle is a social app for small groups of friends. 💬 Chat, share moments and plan things together without the noise of big social networks.",
        )),
        (FEATURES_INFO, R::fixed(
            "Huddle has group chats, voice and video calls, a community message board, custom emoji reactions and dark mode! ✨",
        )),
        (PRICING_INFO, R::fixed("Huddle is free to download and use! 💸 There are no ads and no paid tiers right now.")),
        (DOWNLOAD_INFO, R::fixed("You can download Huddle from the App Store or Google Play! 📱")),
        (PLATFORM_INFO, R::fixed("Huddle runs on iOS and Android, and there's a web version in your browser. 📱")),
        (PRIVACY_INFO, R::fixed(
            "Your privacy matters! 🔒 Messages are end-to-end encrypted and we never sell your data.",
        )),
        (SAFETY_INFO, R::fixed(
            "You can block or report anyone from their profile. 🛡️ Reports go to our moderators, who review them quickly.",
        )),
        (ACCOUNT_HELP, R::fixed("You can sign up with your email or phone number right in the app. 👤 Your profile settings live under the gear icon.")),
        (DELETE_ACCOUNT, R::fixed(
            "Sorry to see you go! 😢 Go to Settings > Account > Delete account. Your data is removed within 30 days.",
        )),
        (PASSWORD_RESET, R::fixed("Tap \"Forgot password?\" on the login screen and we'll email you a reset link. 🔑")),
        (CONTACT_SUPPORT, R::fixed("You can reach a real human at support@huddle.app! 📧 We usually answer within a day.")),
        (BUG_REPORT, R::fixed(
            "Sorry about that! 🐛 Please send the details to support@huddle.app or use Settings > Report a problem.",
        )),
        (FEEDBACK_INFO, R::fixed("We love feedback! 💡 Leave it on the message board or in the survey on this site.")),
        (MESSAGE_BOARD_INFO, R::fixed(
            "The message board is where the community hangs out! 💬 Head to the Community page to read posts and leave your own.",
        )),
        (REVIEWS_INFO, R::fixed("You can read reviews and leave your own on the Reviews page! ⭐")),
        (SURVEY_INFO, R::fixed("We have a short survey about what you'd like to see in Huddle. 📋 Want to help us out?")),
        (TEAM_INFO, R::fixed("Huddle is built by a small team who wanted a calmer way to stay close to friends. 🛠️")),
        (CAREERS_INFO, R::fixed("We're not hiring right now, but keep an eye on the About page! 💼")),
        (EMOJI_INFO, R::fixed("Huddle has a custom emoji set and you can react to any message! 😊")),
        (NOTIFICATIONS_INFO, R::fixed("You can mute any chat or tune notifications in Settings > Notifications. 🔔")),
        (DARK_MODE_INFO, R::fixed("Yes, Huddle has dark mode! 🌙 Switch it under Settings > Appearance.")),
        (GROUP_CHAT_INFO, R::fixed("Group chats on Huddle hold up to 50 people. 💬 Start one with the + button.")),
        (VIDEO_CALL_INFO, R::fixed("You can start voice or video calls from any chat! 📞 Group calls support up to 8 people.")),
        (AGE_REQUIREMENT, R::fixed("You need to be at least 13 years old to use Huddle. 🔞")),
        (LANGUAGE_SUPPORT, R::fixed("Huddle is available in English, Spanish, French and German, with more on the way! 🌍")),
        // jokes
        (JOKE_REQUEST, R::one_of(tables::JOKES)),
        (JOKE_ANIMAL, R::Generated(animal_joke)),
        (JOKE_KNOCK_KNOCK, R::one_of(tables::KNOCK_KNOCK)),
        (JOKE_PUN, R::one_of(tables::PUNS)),
        (JOKE_PROGRAMMING, R::one_of(tables::PROGRAMMING_JOKES)),
        (RIDDLE, R::Generated(riddle)),
        // knowledge and small talk
        (FUN_FACT, R::one_of(tables::FUN_FACTS)),
        (SPACE_FACT, R::one_of(tables::SPACE_FACTS)),
        (ANIMAL_FACT, R::one_of(tables::ANIMAL_FACTS)),
        (LIST_DAYS, R::Generated(list_days)),
        (LIST_MONTHS, R::Generated(list_months)),
        (LIST_PLANETS, R::Generated(list_planets)),
        (COUNT_DAYS, R::Generated(count_days)),
        (COUNT_MONTHS, R::Generated(count_months)),
        (COUNT_PLANETS, R::Generated(count_planets)),
        (MATH_SIMPLE, R::Generated(arithmetic)),
        (COIN_FLIP, R::Generated(coin_flip)),
        (DICE_ROLL, R::Generated(dice_roll)),
        (WEATHER, R::fixed("I can't look outside, but I hope it's sunny where you are! ☀️")),
        (TIME_QUESTION, R::fixed("I don't have a clock, but your device does! ⏰")),
        (MUSIC, R::fixed("I love music! 🎵 What have you been listening to lately?")),
        (MOVIES, R::fixed("Movie night sounds fun! 🎬 Huddle groups are great for planning one.")),
        (FOOD, R::fixed("Now I'm hungry and I don't even eat! 🍕 What's your favorite food?")),
        (SPORTS, R::fixed("Go team! ⚽ Lots of Huddle groups use the app to plan games.")),
        (GAMES, R::fixed("Games are awesome! 🎮 What do you like to play?")),
        (BOOKS, R::fixed("Reading is great! 📚 Got any recommendations?")),
        (PETS, R::fixed("I love pets! 🐶 Tell me about yours.")),
        (TRAVEL, R::fixed("Travel plans? ✈️ Group chats on Huddle make planning trips with friends easy.")),
        // feelings
        (FEELING_HAPPY, R::one_of(&[
            "That's awesome, {name}! 😄 Love to hear it.",
            "Yay! 😄 Happiness looks good on you.",
        ])),
        (FEELING_SAD, R::one_of(&[
            "I'm sorry you're feeling down, {name}. 😢 Want to talk about it?",
            "That sounds hard. 😢 Want to talk about it?",
        ])),
        (FEELING_ANGRY, R::fixed("That sounds frustrating. 😤 Take a deep breath. Want to tell me what happened?")),
        (FEELING_BORED, R::fixed("Bored? 🥱 Want to hear a joke?")),
        (FEELING_LONELY, R::fixed(
            "I'm sorry you feel lonely, {name}. 🤗 You're not alone here. Want some ideas for meeting people on Huddle?",
        )),
        (FEELING_TIRED, R::fixed("Sounds like you need some rest! 😴 Don't forget to take care of yourself.")),
        (FEELING_HUNGRY, R::fixed("Time for a snack! 🍕 What are you craving?")),
        (FEELING_STRESSED, R::fixed(
            "That sounds like a lot. 🤗 Try a few slow breaths. Want a tip that helps me stay calm?",
        )),
        // conversation
        (HELP, R::fixed(
            "Of course! 🙋 You can ask me about Huddle's features, privacy, downloads or your account. I also tell jokes!",
        )),
        (CAPABILITIES, R::fixed(
            "I can answer questions about Huddle, tell jokes and riddles, share fun facts, do simple math and flip coins! 🙋",
        )),
        (REPEAT, R::Generated(repeat_last)),
        (CONFUSED, R::fixed("Sorry for the confusion! 🤔 Try asking me about Huddle's features, privacy or pricing.")),
        // follow-ups
        (WHY, R::one_of(&[
            "Good question! 🤔 I'm a simple assistant, so I don't always know the why.",
            "Hmm, that's a deep one. 🤔 What makes you ask?",
        ])),
        (WHEN, R::fixed("I'm not great with dates. 🤔 Check the Huddle blog for the latest news!")),
        (MORE, R::fixed("More about what? 🤔 Ask me about features, privacy or jokes!")),
        (AFFIRMATIVE, R::one_of(&[
            "Great! 👍 What would you like to talk about?",
            "Awesome! 👍 Ask me anything.",
        ])),
        (NEGATIVE, R::one_of(&[
            "No worries! 👍 Let me know if you need anything.",
            "Okay! 👍 I'm here if you change your mind.",
        ])),
    ];

    let mut table = ResponseTable::new();
    for (label, entry) in entries {
        table.insert(label, entry);
    }
    table
}

pub fn follow_ups() -> FollowUpTable {
    use ResponseEntry as R;

    let mut table = FollowUpTable::new(super::labels::follow_ups()).with_repeat(MORE);
    let specialized = [
        (PRIVACY_INFO, WHY, R::fixed("Because your conversations belong to you and your friends, not to advertisers. 🔒")),
        (PRICING_INFO, WHY, R::fixed("We'd rather grow by being useful than by charging for the basics. 💸")),
        (BOT_IDENTITY, WHY, R::fixed("A script is predictable and private. 🤖 I never send your messages anywhere to be learned from.")),
        (BOT_LEARNING, WHY, R::fixed("Because nothing you tell me is stored or used for training. 🔒 Your chat ends when you close the page.")),
        (AGE_REQUIREMENT, WHY, R::fixed("It's required by child-privacy laws in many countries. 🔞")),
        (BOT_FAVORITE_COLOR, WHY, R::fixed("It's the color of our logo! 💜")),
        (DOWNLOAD_INFO, WHEN, R::fixed("Right now! 📱 Huddle is already live on both stores.")),
        (PLATFORM_INFO, WHEN, R::fixed("There's no date yet for a desktop app, but the web version works today! 💻")),
        (VIDEO_CALL_INFO, WHEN, R::fixed("Calls are already available in the latest version! 📞")),
        (FEELING_SAD, AFFIRMATIVE, R::fixed("I'm listening. 💬 What's been on your mind?")),
        (FEELING_SAD, NEGATIVE, R::fixed("That's okay. 🤗 I'm here whenever you want to chat.")),
        (FEELING_BORED, AFFIRMATIVE, R::one_of(tables::JOKES)),
        (FEELING_BORED, NEGATIVE, R::fixed("How about a fun fact instead? Octopuses have three hearts! 💡")),
        (FEELING_LONELY, AFFIRMATIVE, R::fixed(
            "Try the message board! 💬 People share hobbies there and start new groups all the time.",
        )),
        (FEELING_STRESSED, AFFIRMATIVE, R::fixed("Breathe in for 4 seconds, hold for 4, breathe out for 4. 🤗 Repeat a few times.")),
        (BOT_HOBBY, AFFIRMATIVE, R::one_of(tables::JOKES)),
        (SURVEY_INFO, AFFIRMATIVE, R::fixed("Thank you! 🙏 You'll find the survey at the bottom of the home page.")),
        (SURVEY_INFO, NEGATIVE, R::fixed("No problem! 👍 It'll be there if you change your mind.")),
        (FEELING_ANGRY, AFFIRMATIVE, R::fixed("Go ahead, I'm listening. 💬")),
    ];
    for (prior, follow_up, entry) in specialized {
        table.specialize(prior, follow_up, entry);
    }
    table
}

pub fn interests() -> InterestTable {
    let mut table = InterestTable::new();
    let tagged: &[(_, &[&'static str])] = &[
        (JOKE_REQUEST, &["humor"]),
        (JOKE_ANIMAL, &["humor", "animals"]),
        (JOKE_KNOCK_KNOCK, &["humor"]),
        (JOKE_PUN, &["humor"]),
        (JOKE_PROGRAMMING, &["humor", "technology"]),
        (RIDDLE, &["puzzles"]),
        (SPACE_FACT, &["space"]),
        (LIST_PLANETS, &["space"]),
        (COUNT_PLANETS, &["space"]),
        (ANIMAL_FACT, &["animals"]),
        (PETS, &["animals"]),
        (MUSIC, &["music"]),
        (MOVIES, &["movies"]),
        (FOOD, &["food"]),
        (SPORTS, &["sports"]),
        (GAMES, &["gaming"]),
        (BOOKS, &["reading"]),
        (TRAVEL, &["travel"]),
        (PRIVACY_INFO, &["privacy"]),
        (SAFETY_INFO, &["safety"]),
        (MESSAGE_BOARD_INFO, &["community"]),
        (REVIEWS_INFO, &["community"]),
        (GROUP_CHAT_INFO, &["chatting"]),
        (VIDEO_CALL_INFO, &["chatting"]),
    ];
    for (label, tags) in tagged {
        table.insert(label.clone(), tags);
    }
    table
}

fn self_intro(input: &GenerateInput<'_>, _: &mut dyn RngCore) -> String {
    match input.context.user_name.as_deref() {
        Some(name) => format!("Nice to meet you, {}! 😊 I'm Pip. Ask me anything about Huddle.", name),
        None => "Nice to meet you! 😊 I'm Pip. Ask me anything about Huddle.".to_string(),
    }
}

fn recall_name(input: &GenerateInput<'_>, _: &mut dyn RngCore) -> String {
    match input.context.user_name.as_deref() {
        Some(name) => format!("Your name is {}! 😊 I never forget a name (until you close the page).", name),
        None => "You haven't told me your name yet! 🤔 What should I call you?".to_string(),
    }
}

fn repeat_last(input: &GenerateInput<'_>, _: &mut dyn RngCore) -> String {
    match input.context.last_reply.as_deref() {
        Some(last) => format!("Sure! I said: {}", last),
        None => "I haven't said anything yet! 🤔".to_string(),
    }
}

fn animal_joke(input: &GenerateInput<'_>, rng: &mut dyn RngCore) -> String {
    if let Some((_, _, answer)) = tables::ANIMAL_RIDDLES
        .iter()
        .find(|(key, _, _)| input.text.contains(key))
    {
        return answer.to_string();
    }
    tables::ANIMAL_RIDDLES
        .choose(rng)
        .map(|(_, question, answer)| format!("{} {}", question, answer))
        .unwrap_or_default()
}

fn riddle(_: &GenerateInput<'_>, rng: &mut dyn RngCore) -> String {
    tables::RIDDLES
        .choose(rng)
        .map(|(question, answer)| format!("🧩 {} ... {}", question, answer))
        .unwrap_or_default()
}

fn list_days(_: &GenerateInput<'_>, _: &mut dyn RngCore) -> String {
    format!("The days of the week are {}. 📅", join_list(tables::DAYS))
}

fn list_months(_: &GenerateInput<'_>, _: &mut dyn RngCore) -> String {
    format!("The months of the year are {}. 📅", join_list(tables::MONTHS))
}

fn list_planets(_: &GenerateInput<'_>, _: &mut dyn RngCore) -> String {
    format!("The planets in our solar system are {}. 🪐", join_list(tables::PLANETS))
}

fn count_days(_: &GenerateInput<'_>, _: &mut dyn RngCore) -> String {
    format!("There are {} days in a week. 📅", tables::DAYS.len())
}

fn count_months(_: &GenerateInput<'_>, _: &mut dyn RngCore) -> String {
    format!("There are {} months in a year. 📅", tables::MONTHS.len())
}

fn count_planets(_: &GenerateInput<'_>, _: &mut dyn RngCore) -> String {
    format!(
        "There are {} planets in our solar system. 🪐 Sorry, Pluto!",
        tables::PLANETS.len()
    )
}

fn coin_flip(_: &GenerateInput<'_>, rng: &mut dyn RngCore) -> String {
    let side = if rng.gen_bool(0.5) { "Heads" } else { "Tails" };
    format!("🪙 {}!", side)
}

fn dice_roll(_: &GenerateInput<'_>, rng: &mut dyn RngCore) -> String {
    format!("🎲 You rolled a {}!", rng.gen_range(1..=6))
}

fn arithmetic(input: &GenerateInput<'_>, _: &mut dyn RngCore) -> String {
    let Some(caps) = ARITHMETIC.captures(input.text) else {
        return "I can only do simple math like \"what is 7 times 6\". 🧮".to_string();
    };
    let (Ok(a), Ok(b)) = (caps[1].parse::<f64>(), caps[3].parse::<f64>()) else {
        return "Those numbers confuse me! 🧮".to_string();
    };

    let op = caps[2].trim();
    let result = match op {
        "+" | "plus" => a + b,
        "-" | "minus" => a - b,
        "*" | "x" | "times" | "multiplied by" => a * b,
        _ => {
            if b == 0.0 {
                return "Dividing by zero? Even I know better than that! 🤔".to_string();
            }
            a / b
        }
    };

    format!("{} {} {} is {}. 🧮", format_number(a), op, format_number(b), format_number(result))
}

fn format_number(n: f64) -> String {
    let rounded = (n * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

/// "a, b and c"
fn join_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
