use super::carousel::Carousel;

const IMAGE_HOST: &str = "https://images.squarespace-cdn.com/content/v1/59d4e29ac027d8f12df47f49";

const GALLERY_IMAGES: [&str; 15] = [
    "1507208572358-ZU73JBVWHOH9W16IN9UH/16198942527_80d315f6c8_o.jpg",
    "1567687980262-R01VKBQKZQQ0PU6AVYBH/Eternal+The+Show-9.jpg",
    "1567688161854-PHS7VPBUBCZ45VBOJLRA/Eternal+The+Show-3.jpg",
    "1567688308635-MWVZ15D9TU3O2ZYYAZCM/Eternal+The+Show-20.jpg",
    "1567688440851-OCWDWNMFXWG2SM43XRJI/Eternal+The+Show-21.jpg",
    "1507208982602-8F1XOKYVLCTL9T21EP1E/15783890164_657075ea2f_o.jpg",
    "1507209115020-T8XLJ964FSBGPS0WH404/26597747982_2c796675b4_o+%281%29.jpg",
    "1507208917272-N3RMAJX23AEEQT8DCORX/16358901526_39c7c27d23_o.jpg",
    "1507209565971-LASKUQY0VOL9CHOBPXNY/26663986496_d9f7f040fa_o.jpg",
    "1507209859439-LKOL5IXKIH2YQ4H60ZKZ/26624593331_0639601b88_o+%281%29.jpg",
    "1507209948785-1B3H2WJ7FCKSNVI4ODEG/ABL-5.jpg",
    "1507210332539-YI23GP65QJI2MBP0PIDF/ABL-148.jpg",
    "1567688335012-74B4WNEZB1VX4S4CKOZ7/Eternal+The+Show-27.jpg",
    "1569417665485-IIGV7JN070J6UY4B6WDD/Eternal+2019_Medium+Res-325.jpg",
    "1508253226485-6NRS44HH9QOK5QJSSIO5/bw-2.jpg",
];

pub fn gallery_image_urls() -> Vec<String> {
    GALLERY_IMAGES
        .iter()
        .map(|path| format!("{}/{}?format=2500w", IMAGE_HOST, path))
        .collect()
}

/// Home page photo carousel.
pub fn home_gallery() -> Carousel<String> {
    Carousel::new(gallery_image_urls())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn home_gallery_should_hold_every_image() {
        let gallery = home_gallery();

        assert_eq!(gallery.len(), GALLERY_IMAGES.len());
        assert!(gallery.current().starts_with(IMAGE_HOST));
        assert!(gallery.current().ends_with("16198942527_80d315f6c8_o.jpg?format=2500w"));
    }

    #[test_log::test]
    fn going_back_from_first_image_should_show_last() {
        let mut gallery = home_gallery();

        gallery.previous();

        assert!(gallery.current().contains("bw-2.jpg"));
    }
}
