use super::*;

fn filled() -> BookingInput {
    BookingInput {
        name: "  Ravi Shah ".to_owned(),
        phone: "+91 98765 43210".to_owned(),
        age: "34".to_owned(),
        gender: "Female".to_owned(),
        symptoms: " Fever since two days ".to_owned(),
    }
}

#[test]
fn valid_input_builds_booking() {
    let booking = validate_booking_input("slot-1", &filled()).unwrap();
    assert_eq!(booking.slot_id, "slot-1");
    assert_eq!(booking.user.name, "Ravi Shah");
    assert_eq!(booking.user.phone, "9876543210");
    assert_eq!(booking.user.age, Some(34));
    assert_eq!(booking.user.gender, Gender::Female);
    assert_eq!(booking.symptoms.as_deref(), Some("Fever since two days"));
}

#[test]
fn optional_fields_may_be_blank() {
    let input = BookingInput { age: String::new(), symptoms: "   ".to_owned(), gender: String::new(), ..filled() };
    let booking = validate_booking_input("s", &input).unwrap();
    assert_eq!(booking.user.age, None);
    assert_eq!(booking.symptoms, None);
    assert_eq!(booking.user.gender, Gender::Male);
}

#[test]
fn name_is_required() {
    let input = BookingInput { name: "  ".to_owned(), ..filled() };
    assert_eq!(validate_booking_input("s", &input), Err("Please enter the patient's name."));
}

#[test]
fn phone_must_be_indian_mobile() {
    let input = BookingInput { phone: "12345".to_owned(), ..filled() };
    assert_eq!(validate_booking_input("s", &input), Err("Please enter a valid 10-digit mobile number."));
}

#[test]
fn age_out_of_range_is_rejected() {
    for age in ["0", "121", "abc", "-3"] {
        let input = BookingInput { age: age.to_owned(), ..filled() };
        assert_eq!(validate_booking_input("s", &input), Err("Age must be between 1 and 120."), "{age}");
    }
}
