use hotelstore_core::{decode, encode, Customer, Hotel, RecordValidationError, Reservation};

#[test]
fn records_serialize_with_field_names() {
    let hotel = Hotel::new("Hotel Plaza", "NYC", "100", "150.00");

    let json = serde_json::to_value(&hotel).unwrap();
    assert_eq!(json["name"], "Hotel Plaza");
    assert_eq!(json["location"], "NYC");
    assert_eq!(json["rooms"], "100");
    assert_eq!(json["price"], "150.00");

    let decoded: Hotel = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, hotel);
}

#[test]
fn reservation_serializes_both_names() {
    let reservation = Reservation::new("John Doe", "Grand Hotel");

    let json = serde_json::to_value(&reservation).unwrap();
    assert_eq!(json["customer_name"], "John Doe");
    assert_eq!(json["hotel_name"], "Grand Hotel");
}

#[test]
fn line_codec_roundtrips_values_with_spaces_and_symbols() {
    let customer = Customer::new("Dr. Ana María", "ana+hotel@example.com", "+52 (55) 1234");
    assert_eq!(decode::<Customer>(&encode(&customer)).unwrap(), customer);

    let hotel = Hotel::new("Hôtel du Lac", "Genève, CH", "12", "310.50");
    assert_eq!(decode::<Hotel>(&encode(&hotel)).unwrap(), hotel);
}

#[test]
fn validate_rejects_delimiter_in_any_field() {
    let customer = Customer::new("Ana", "a|b@example.com", "1");

    let err = customer.validate().unwrap_err();
    assert!(matches!(
        err,
        RecordValidationError::ForbiddenCharacter { field: "email", .. }
    ));
    assert!(Reservation::new("A", "B\nC").validate().is_err());
    assert!(Hotel::new("A", "B", "1", "2.0").validate().is_ok());
}
