//! Test-only, in-memory `RestaurantStore` implementation and the seeded
//! sample catalog used by unit and behaviour tests.

use chrono::{DateTime, Duration, NaiveTime, Utc, Weekday};

use crate::{
    BusinessHours, CuisineType, Location, MenuItem, Restaurant, RestaurantStore, Review,
    StoreError, TimeSlot,
};

/// In-memory `RestaurantStore` backed by a vector.
///
/// The store performs linear scans and preserves insertion order, which
/// keeps test expectations stable. Saving an existing id replaces the
/// record in place.
#[derive(Default, Debug)]
pub struct MemoryStore {
    restaurants: Vec<Restaurant>,
}

impl MemoryStore {
    /// Create a store containing a single restaurant.
    #[must_use]
    pub fn with_restaurant(restaurant: Restaurant) -> Self {
        Self::with_restaurants(std::iter::once(restaurant))
    }

    /// Create a store from a collection of restaurants.
    pub fn with_restaurants<I>(restaurants: I) -> Self
    where
        I: IntoIterator<Item = Restaurant>,
    {
        Self {
            restaurants: restaurants.into_iter().collect(),
        }
    }
}

impl RestaurantStore for MemoryStore {
    fn save(&mut self, restaurant: Restaurant) -> Result<Restaurant, StoreError> {
        if restaurant.id.trim().is_empty() {
            return Err(StoreError::InvalidId);
        }
        match self
            .restaurants
            .iter_mut()
            .find(|existing| existing.id == restaurant.id)
        {
            Some(existing) => *existing = restaurant.clone(),
            None => self.restaurants.push(restaurant.clone()),
        }
        Ok(restaurant)
    }

    fn find_by_id(&self, id: &str) -> Option<Restaurant> {
        self.restaurants.iter().find(|r| r.id == id).cloned()
    }

    fn find_all(&self) -> Vec<Restaurant> {
        self.restaurants.clone()
    }

    fn exists(&self, id: &str) -> bool {
        self.restaurants.iter().any(|r| r.id == id)
    }

    fn delete(&mut self, id: &str) -> bool {
        let before = self.restaurants.len();
        self.restaurants.retain(|r| r.id != id);
        self.restaurants.len() < before
    }

    fn count(&self) -> usize {
        self.restaurants.len()
    }
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

fn review(
    id: &str,
    restaurant_id: &str,
    rating: i32,
    age_days: i64,
    user_level: u8,
    verified: bool,
    helpful: u32,
) -> Review {
    Review::new(id, restaurant_id, rating, "")
        .with_created_at(days_ago(age_days))
        .with_user_level(user_level)
        .with_verified(verified)
        .with_helpful_count(helpful)
}

fn daily(open: NaiveTime, close: NaiveTime) -> BusinessHours {
    BusinessHours::new().with_daily_slot(TimeSlot::new(open, close))
}

/// The ten-restaurant reference catalog the behaviour suites run against.
///
/// The data is Taiwan-centric on purpose: it exercises multi-byte keyword
/// search, two price-tier-4 entries, overnight schedules and a restaurant
/// with no menu falling back to its stored average price.
#[must_use]
pub fn sample_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new("r1", "春水堂創始店", CuisineType::Taiwanese)
            .with_description("珍珠奶茶發源地，台式茶館")
            .with_extra_cuisine(CuisineType::Cafe)
            .with_extra_cuisine(CuisineType::Dessert)
            .with_location(Location::new(
                24.1466,
                120.6723,
                "四維街30號",
                "台中市",
                "西區",
            ))
            .with_price_level(2)
            .with_menu_item(MenuItem::new("r1-m1", "珍珠奶茶", 90.0))
            .with_menu_item(MenuItem::new("r1-m2", "功夫麵", 130.0))
            .with_menu_item(MenuItem::new("r1-m3", "鐵觀音拿鐵", 110.0))
            .with_review(review("r1-v1", "r1", 5, 20, 3, true, 12))
            .with_review(review("r1-v2", "r1", 5, 45, 2, false, 4))
            .with_review(review("r1-v3", "r1", 4, 90, 1, false, 0))
            .with_review(review("r1-v4", "r1", 4, 200, 4, true, 25))
            .with_hours(daily(time(8, 30), time(22, 0)))
            .with_takeout(true),
        Restaurant::new("r2", "鼎泰豐信義店", CuisineType::Chinese)
            .with_description("小籠包名店")
            .with_extra_cuisine(CuisineType::Taiwanese)
            .with_location(Location::new(
                25.0336,
                121.5303,
                "信義路二段194號",
                "台北市",
                "大安區",
            ))
            .with_price_level(3)
            .with_menu_item(MenuItem::new("r2-m1", "小籠包", 250.0))
            .with_menu_item(MenuItem::new("r2-m2", "蝦仁炒飯", 280.0))
            .with_review(review("r2-v1", "r2", 5, 5, 2, true, 30))
            .with_review(review("r2-v2", "r2", 5, 12, 1, false, 8))
            .with_review(review("r2-v3", "r2", 5, 30, 3, true, 15))
            .with_review(review("r2-v4", "r2", 4, 60, 1, false, 2))
            .with_review(review("r2-v5", "r2", 5, 120, 5, true, 40))
            .with_review(review("r2-v6", "r2", 4, 240, 2, false, 1))
            .with_hours(daily(time(10, 0), time(21, 0)))
            .with_takeout(true)
            .with_reservations(true),
        Restaurant::new("r3", "阿宗麵線", CuisineType::Taiwanese)
            .with_description("西門町排隊小吃")
            .with_location(Location::new(
                25.0444,
                121.5071,
                "峨眉街8-1號",
                "台北市",
                "萬華區",
            ))
            .with_price_level(1)
            .with_average_price(65.0)
            .with_review(review("r3-v1", "r3", 4, 3, 1, false, 5))
            .with_review(review("r3-v2", "r3", 4, 15, 2, false, 0))
            .with_review(review("r3-v3", "r3", 5, 40, 1, true, 9))
            .with_review(review("r3-v4", "r3", 3, 100, 1, false, 0))
            .with_review(review("r3-v5", "r3", 4, 300, 3, false, 2))
            .with_hours(daily(time(11, 0), time(22, 30)))
            .with_takeout(true),
        Restaurant::new("r4", "欣葉台菜創始店", CuisineType::Taiwanese)
            .with_description("經典台菜料理")
            .with_location(Location::new(
                25.0634,
                121.5245,
                "雙城街34-1號",
                "台北市",
                "中山區",
            ))
            .with_price_level(3)
            .with_menu_item(MenuItem::new("r4-m1", "菜脯蛋", 280.0))
            .with_menu_item(MenuItem::new("r4-m2", "杏仁豆腐", 120.0))
            .with_menu_item(MenuItem::new("r4-m3", "煎豬肝", 380.0))
            .with_review(review("r4-v1", "r4", 4, 25, 2, true, 6))
            .with_review(review("r4-v2", "r4", 5, 75, 3, false, 3))
            .with_review(review("r4-v3", "r4", 4, 150, 1, false, 0))
            .with_hours(daily(time(11, 0), time(21, 30)))
            .with_reservations(true)
            .with_parking(true),
        Restaurant::new("r5", "馬辣頂級麻辣鴛鴦火鍋", CuisineType::HotPot)
            .with_description("吃到飽麻辣火鍋")
            .with_extra_cuisine(CuisineType::Chinese)
            .with_location(Location::new(
                25.0329,
                121.5436,
                "忠孝東路四段97號",
                "台北市",
                "大安區",
            ))
            .with_price_level(4)
            .with_average_price(850.0)
            .with_review(review("r5-v1", "r5", 4, 10, 1, false, 3))
            .with_review(review("r5-v2", "r5", 4, 35, 2, true, 7))
            .with_review(review("r5-v3", "r5", 3, 80, 1, false, 1))
            .with_review(review("r5-v4", "r5", 5, 160, 3, false, 0))
            // Last orders run past midnight.
            .with_hours(daily(time(11, 30), time(0, 30)))
            .with_reservations(true),
        Restaurant::new("r6", "RAW", CuisineType::French)
            .with_description("主廚江振誠的台灣風土料理")
            .with_location(Location::new(
                25.0816,
                121.5569,
                "樂群三路301號",
                "台北市",
                "中山區",
            ))
            .with_price_level(4)
            .with_menu_item(MenuItem::new("r6-m1", "Tasting Menu", 3880.0))
            .with_review(review("r6-v1", "r6", 5, 8, 4, true, 50))
            .with_review(review("r6-v2", "r6", 5, 30, 5, true, 33))
            .with_review(review("r6-v3", "r6", 5, 90, 3, true, 12))
            .with_review(review("r6-v4", "r6", 4, 180, 2, false, 5))
            .with_review(review("r6-v5", "r6", 5, 360, 4, true, 60))
            .with_hours(
                BusinessHours::new()
                    .with_slot(Weekday::Wed, TimeSlot::new(time(18, 0), time(22, 0)))
                    .with_slot(Weekday::Thu, TimeSlot::new(time(18, 0), time(22, 0)))
                    .with_slot(Weekday::Fri, TimeSlot::new(time(18, 0), time(22, 0)))
                    .with_slot(Weekday::Sat, TimeSlot::new(time(12, 0), time(22, 0)))
                    .with_slot(Weekday::Sun, TimeSlot::new(time(12, 0), time(21, 0)))
                    .with_holiday_closure(true),
            )
            .with_reservations(true)
            .with_parking(true),
        Restaurant::new("r7", "壽司郎台北館前店", CuisineType::Japanese)
            .with_description("迴轉壽司連鎖")
            .with_extra_cuisine(CuisineType::Seafood)
            .with_location(Location::new(
                25.0457,
                121.5150,
                "館前路8號",
                "台北市",
                "中正區",
            ))
            .with_price_level(2)
            .with_menu_item(MenuItem::new("r7-m1", "鮭魚握壽司", 60.0))
            .with_menu_item(MenuItem::new("r7-m2", "炙燒比目魚", 120.0))
            .with_review(review("r7-v1", "r7", 4, 7, 1, false, 2))
            .with_review(review("r7-v2", "r7", 4, 50, 2, false, 0))
            .with_hours(daily(time(11, 0), time(22, 0)))
            .with_takeout(true)
            .with_delivery(true),
        Restaurant::new("r8", "瓦城泰國料理", CuisineType::Thai)
            .with_description("連鎖泰式餐廳")
            .with_location(Location::new(
                25.0520,
                121.5320,
                "南京東路二段97號",
                "台北市",
                "中山區",
            ))
            .with_price_level(3)
            .with_menu_item(MenuItem::new("r8-m1", "綠咖哩雞", 320.0))
            .with_menu_item(MenuItem::new("r8-m2", "月亮蝦餅", 290.0))
            .with_review(review("r8-v1", "r8", 4, 18, 2, false, 4))
            .with_review(review("r8-v2", "r8", 3, 70, 1, false, 1))
            .with_review(review("r8-v3", "r8", 4, 130, 2, true, 3))
            .with_hours(daily(time(11, 0), time(21, 30)))
            .with_delivery(true)
            .with_takeout(true)
            .with_reservations(true),
        Restaurant::new("r9", "肥前屋", CuisineType::Japanese)
            .with_description("鰻魚飯老店")
            .with_location(Location::new(
                25.0531,
                121.5228,
                "中山北路一段121巷13號",
                "台北市",
                "中山區",
            ))
            .with_price_level(2)
            .with_average_price(480.0)
            .with_review(review("r9-v1", "r9", 5, 12, 2, true, 18))
            .with_review(review("r9-v2", "r9", 4, 40, 1, false, 3))
            .with_review(review("r9-v3", "r9", 4, 110, 1, false, 0))
            .with_review(review("r9-v4", "r9", 5, 250, 3, false, 6))
            .with_hours(
                BusinessHours::new()
                    .with_slot(Weekday::Tue, TimeSlot::new(time(11, 0), time(20, 30)))
                    .with_slot(Weekday::Wed, TimeSlot::new(time(11, 0), time(20, 30)))
                    .with_slot(Weekday::Thu, TimeSlot::new(time(11, 0), time(20, 30)))
                    .with_slot(Weekday::Fri, TimeSlot::new(time(11, 0), time(20, 30)))
                    .with_slot(Weekday::Sat, TimeSlot::new(time(11, 0), time(20, 30)))
                    .with_slot(Weekday::Sun, TimeSlot::new(time(11, 0), time(20, 30))),
            )
            .with_takeout(true),
        Restaurant::new("r10", "深夜食堂居酒屋", CuisineType::Japanese)
            .with_description("深夜營業的串燒居酒屋")
            .with_extra_cuisine(CuisineType::Barbecue)
            .with_location(Location::new(
                25.0412,
                121.5535,
                "延吉街131巷",
                "台北市",
                "大安區",
            ))
            .with_price_level(2)
            .with_average_price(400.0)
            .with_menu_item(MenuItem::new("r10-m1", "雞肉串", 60.0))
            .with_menu_item(MenuItem::new("r10-m2", "炸雞軟骨", 90.0))
            .with_review(review("r10-v1", "r10", 5, 6, 2, false, 4))
            .with_review(review("r10-v2", "r10", 4, 60, 1, false, 1))
            // Opens in the evening and closes at two in the morning.
            .with_hours(daily(time(18, 0), time(2, 0)).with_holiday_closure(true))
            .with_takeout(true),
    ]
}

/// A [`MemoryStore`] pre-seeded with [`sample_restaurants`].
#[must_use]
pub fn sample_catalog() -> MemoryStore {
    MemoryStore::with_restaurants(sample_restaurants())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_seeds_ten_restaurants() {
        assert_eq!(sample_catalog().count(), 10);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let restaurants = sample_restaurants();
        let mut ids: Vec<_> = restaurants.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), restaurants.len());
    }

    #[test]
    fn every_seeded_restaurant_has_reviews() {
        assert!(sample_restaurants().iter().all(|r| r.review_count() > 0));
    }
}
