use super::common::*;
use crate::rubric::content::{flow, keyword_presence, salutation};
use crate::rubric::{Measurement, SalutationTier};

fn tier_of(text: &str) -> (Option<u8>, SalutationTier) {
    let sub = salutation(&transcript(text));
    match sub.measurement {
        Measurement::Salutation { tier } => (sub.score, tier),
        other => panic!("expected salutation measurement, got {other:?}"),
    }
}

#[test]
fn excitement_phrase_outranks_formal_greeting() {
    let (score, tier) = tier_of("Hello everyone, I am excited to introduce myself.");
    assert_eq!(tier, SalutationTier::Excellent);
    assert_eq!(score, Some(5));
}

#[test]
fn formal_greeting_scores_good_tier() {
    assert_eq!(tier_of("Good afternoon, I am Ravi."), (Some(4), SalutationTier::Good));
}

#[test]
fn bare_hi_scores_normal_tier() {
    assert_eq!(tier_of("Hi there, I am Sam."), (Some(2), SalutationTier::Normal));
}

#[test]
fn hi_inside_another_word_is_not_a_salutation() {
    assert_eq!(tier_of("This is Sam from Delhi."), (Some(0), SalutationTier::None));
}

#[test]
fn keyword_presence_for_sample_introduction() {
    let sub = keyword_presence(&transcript(ALEX_INTRO));

    let Measurement::KeywordPresence {
        must_have_present,
        good_to_have_present,
    } = &sub.measurement
    else {
        panic!("expected keyword measurement, got {:?}", sub.measurement);
    };

    assert!(must_have_present.values().all(|present| *present));
    assert_eq!(good_to_have_present.get("about_family"), Some(&true));
    assert_eq!(good_to_have_present.get("origin_location"), Some(&false));
    assert_eq!(sub.score, Some(22));
    assert_eq!(sub.feedback, "5/5 must-have and 1/5 good-to-have topics covered.");
}

#[test]
fn keyword_presence_caps_at_thirty_when_every_topic_is_covered() {
    let text = "My name is Ana, I am 14 years old, I study at Hill School. I love my family: \
                my mother and father. My hobbies are chess and dance. I am from Pune. My goal \
                is to become a doctor. Fun fact: I can juggle. My strength is patience.";

    let sub = keyword_presence(&transcript(text));

    assert_eq!(sub.score, Some(30));
    assert_eq!(sub.max_score, 30);
}

#[test]
fn keyword_presence_is_zero_without_topics() {
    let sub = keyword_presence(&transcript("Weather today: sunny."));
    assert_eq!(sub.score, Some(0));
}

#[test]
fn flow_rewards_sections_in_order() {
    let sub = flow(&transcript(ORDERED_INTRO));

    assert_eq!(sub.score, Some(5));
    let Measurement::Flow { positions } = sub.measurement else {
        panic!("expected flow measurement");
    };
    assert_eq!(positions.salutation, Some(0));
    assert!(positions.closing > positions.additional_details);
}

#[test]
fn flow_is_zero_when_closing_comes_first() {
    let sub = flow(&transcript(
        "Thank you for having me. Hello, my name is Sam and my hobby is chess.",
    ));

    assert_eq!(sub.score, Some(0));
    assert_eq!(sub.feedback, "Order not followed as expected.");
}

#[test]
fn flow_is_zero_when_a_section_is_missing() {
    let sub = flow(&transcript(ALEX_INTRO));

    assert_eq!(sub.score, Some(0));
    assert!(sub.feedback.contains("some sections missing"));
}
